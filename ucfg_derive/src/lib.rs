//! Procedural macros for `ucfg`.
//!
//! `#[derive(Unpack)]` turns a struct with named fields into a `ucfg` struct
//! destination. Each field is read from the config key given by its
//! `#[tag(...)]` attribute for the active tag key, or from its own name.
//! Fields without `pub` (or another visibility qualifier) are never written.
//!
//! ```ignore
//! #[derive(Default, ucfg::Unpack)]
//! struct Server {
//!     #[tag(config = "addr", yaml = "address")]
//!     pub host: String,
//!     pub port: u16,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr, Visibility};

/// Derive macro for `ucfg::Unpack` on structs with named fields.
#[proc_macro_derive(Unpack, attributes(tag))]
pub fn derive_unpack(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Unpack requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Unpack can only be derived for structs",
            ));
        }
    };

    let mut specs = Vec::with_capacity(fields.len());
    let mut arms = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let declared = name.to_string();
        let exported = !matches!(field.vis, Visibility::Inherited);
        let tags = parse_tags(&field.attrs)?.into_iter().map(|(key, value)| {
            quote! { (#key, #value) }
        });

        specs.push(quote! {
            ::ucfg::reify::FieldSpec {
                name: #declared,
                tags: &[#(#tags),*],
                exported: #exported,
            }
        });
        arms.push(quote! {
            #index => ::ucfg::Unpack::reify_merge(&mut self.#name, value, opts),
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ucfg::UnpackStruct for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::ucfg::reify::FieldSpec] = &[#(#specs),*];

            fn unpack_field(
                &mut self,
                index: usize,
                value: &::ucfg::Value,
                opts: &::ucfg::Options,
            ) -> ::core::result::Result<(), ::ucfg::UnpackError> {
                match index {
                    #(#arms)*
                    _ => ::core::result::Result::Ok(()),
                }
            }
        }

        impl #impl_generics ::ucfg::Unpack for #ident #ty_generics #where_clause {
            fn reify(
                value: &::ucfg::Value,
                opts: &::ucfg::Options,
            ) -> ::core::result::Result<Self, ::ucfg::UnpackError> {
                ::ucfg::reify::reify_struct_fresh(value, opts)
            }

            fn reify_merge(
                &mut self,
                value: &::ucfg::Value,
                opts: &::ucfg::Options,
            ) -> ::core::result::Result<(), ::ucfg::UnpackError> {
                ::ucfg::reify::reify_struct_merge(self, value, opts)
            }

            fn unpack_root(
                &mut self,
                from: &::ucfg::Config,
                opts: &::ucfg::Options,
            ) -> ::core::result::Result<(), ::ucfg::UnpackError> {
                ::ucfg::reify::reify_struct(self, from, opts)
            }
        }
    })
}

/// Collects `key = "value"` pairs from every `#[tag(...)]` attribute.
fn parse_tags(attrs: &[Attribute]) -> syn::Result<Vec<(String, LitStr)>> {
    let mut tags = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("tag")) {
        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .ok_or_else(|| meta.error("expected a tag key such as `config`"))?
                .to_string();
            if tags.iter().any(|(existing, _)| *existing == key) {
                return Err(meta.error(format!("duplicate tag key `{key}`")));
            }
            let value: LitStr = meta.value()?.parse()?;
            tags.push((key, value));
            Ok(())
        })?;
    }
    Ok(tags)
}
