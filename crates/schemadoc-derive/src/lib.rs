/*!
Procedural macros for schemadoc type descriptions.

`#[derive(Describe)]` implements `schemadoc::Describe` for structs and enums.
Field names can be overridden with `#[schema(rename = "...")]`; a
`#[serde(rename = "...")]` is used when no `schema` rename is present.
Fields marked `#[serde(skip)]` or `#[serde(skip_serializing)]` are annotated
as `"-"` and so never show up in the schema.
*/

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    ext::IdentExt, meta::ParseNestedMeta, parse_macro_input, parse_quote, Attribute, Data,
    DeriveInput, Fields, GenericParam, Generics, LitStr, Token,
};

/// Derive macro to implement `Describe` for structs and enums
#[proc_macro_derive(Describe, attributes(schema, serde))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    generate_describe_impl(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Generate implementation for the Describe trait
fn generate_describe_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;

    let descriptor = match &input.data {
        Data::Struct(data_struct) => generate_struct_descriptor(&data_struct.fields)?,
        Data::Enum(_) => quote! {
            ::schemadoc::TypeDescriptor::of::<Self>(::schemadoc::TypeKind::Enum)
        },
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Describe cannot be derived for union types",
            ));
        }
    };

    let generics = add_describe_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::schemadoc::Describe for #name #ty_generics #where_clause {
            fn describe() -> ::schemadoc::TypeDescriptor {
                #descriptor
            }
        }
    })
}

/// Generate the struct descriptor, one field descriptor per declared field
fn generate_struct_descriptor(fields: &Fields) -> Result<TokenStream2, syn::Error> {
    let mut field_descriptors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        // tuple struct fields are named by position
        let ident = match &field.ident {
            Some(ident) => ident.unraw().to_string(),
            None => index.to_string(),
        };
        let field_type = &field.ty;

        let mut descriptor = quote! {
            ::schemadoc::FieldDescriptor::new(
                #ident,
                <#field_type as ::schemadoc::Describe>::describe(),
            )
        };
        if let Some(annotation) = field_annotation(&field.attrs)? {
            descriptor = quote! { #descriptor.with_annotation(#annotation) };
        }

        field_descriptors.push(descriptor);
    }

    Ok(quote! {
        ::schemadoc::TypeDescriptor::structure(
            ::std::any::type_name::<Self>(),
            ::std::vec![#(#field_descriptors),*],
        )
    })
}

/// Find the name annotation of a field.
///
/// `#[schema(rename)]` takes precedence over serde attributes; among those a
/// serde skip wins over `#[serde(rename)]`.
fn field_annotation(attrs: &[Attribute]) -> Result<Option<LitStr>, syn::Error> {
    let mut schema_rename = None;
    let mut serde_rename = None;
    let mut serde_skip = None;

    for attr in attrs {
        if attr.path().is_ident("schema") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    schema_rename = Some(meta.value()?.parse::<LitStr>()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported schema attribute, expected `rename`"))
                }
            })?;
        } else if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Some(rename) = parse_serde_rename(&meta)? {
                        serde_rename = Some(rename);
                    }
                    Ok(())
                } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                    // "-" has no upper-case first character, hiding the field
                    serde_skip = Some(LitStr::new("-", meta.path.span()));
                    Ok(())
                } else {
                    skip_meta_value(&meta)
                }
            })?;
        }
    }

    Ok(schema_rename.or(serde_skip).or(serde_rename))
}

/// Parse `rename = "..."` or `rename(serialize = "...")`
fn parse_serde_rename(meta: &ParseNestedMeta) -> Result<Option<LitStr>, syn::Error> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse::<LitStr>()?));
    }

    let mut rename = None;
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("serialize") {
            rename = Some(nested.value()?.parse::<LitStr>()?);
            Ok(())
        } else {
            skip_meta_value(&nested)
        }
    })?;
    Ok(rename)
}

/// Consume the value of a serde option this macro does not care about
fn skip_meta_value(meta: &ParseNestedMeta) -> Result<(), syn::Error> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream2>()?;
    }
    Ok(())
}

/// Require `Describe` on every type parameter
fn add_describe_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::schemadoc::Describe));
        }
    }
    generics
}
