use proc_macro::TokenStream;
use quote::quote;
use syn::{AttrStyle, Attribute, Data, DeriveInput};

/// Implements `tagged_endian::traits::Plain` for a struct.
///
/// The struct must be non-generic, `#[repr(C)]` (optionally `packed`) or
/// `#[repr(transparent)]`, and every field must itself be `Plain`. A
/// compile-time assertion rejects structs whose fields leave padding bytes.
#[proc_macro_derive(Plain)]
pub fn plain_derive_macro(item: TokenStream) -> TokenStream {
    let ast = syn::parse(item).unwrap(); //parse
    impl_plain_trait(ast) //generate
}

fn impl_plain_trait(ast: DeriveInput) -> TokenStream {
    let ident = &ast.ident;

    if !ast.generics.params.is_empty() {
        panic!("#[derive(Plain)] does not support generic structs")
    }

    let reprs = repr_options(&ast.attrs);
    if !reprs.iter().any(|repr| repr == "C" || repr == "transparent") {
        panic!("#[derive(Plain)] requires #[repr(C)] or #[repr(transparent)]")
    }
    if reprs.iter().any(|repr| repr == "align") {
        panic!("#[derive(Plain)] does not support structs with an `align` repr")
    }

    let field_tys: Vec<_> = match &ast.data {
        Data::Struct(data) => data.fields.iter().map(|field| &field.ty).collect(),
        _ => panic!("#[derive(Plain)] is only defined for structs"),
    };

    quote! {
        unsafe impl ::tagged_endian::traits::Plain for #ident {}

        const _: () = {
            #[allow(dead_code)]
            fn assert_fields_are_plain() {
                fn assert_plain<T: ::tagged_endian::traits::Plain>() {}
                #( assert_plain::<#field_tys>(); )*
            }

            assert!(
                ::core::mem::size_of::<#ident>() == 0 #( + ::core::mem::size_of::<#field_tys>() )*,
                concat!("`", stringify!(#ident), "` has padding bytes")
            );
        };
    }
    .into()
}

/// Collects the option names of every outer `#[repr(...)]` attribute,
/// e.g. `["C", "packed"]`.
fn repr_options(attrs: &[Attribute]) -> Vec<String> {
    let mut reprs = Vec::new();
    for attr in attrs {
        if !matches!(attr.style, AttrStyle::Outer) || !attr.path().is_ident("repr") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                reprs.push(ident.to_string());
            }
            // Skip arguments such as the `2` in `packed(2)`
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<proc_macro2::TokenStream>()?;
            }
            Ok(())
        })
        .unwrap_or_else(|err| panic!("Malformed repr attribute: {err}"));
    }
    reprs
}
