//! Proc-macros for lumen-gui.
//!
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field of a style record.
//!
//! ## Field attributes
//! - `#[with_builders(skip)]`: no builder is generated for the field.
//! - `#[with_builders(into)]`: the builder accepts `impl Into<FieldType>`.
//!
//! ```ignore
//! use lumen_gui_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, WithBuilders)]
//! pub struct Style {
//!     pub font_size: f32,
//!     #[with_builders(into)]
//!     pub font: FontId,
//!     #[with_builders(skip)]
//!     pub debug_only: bool,
//! }
//!
//! let s = Style::default().with_font_size(18.0).with_font(2u32);
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Field, Fields};

/// Builder options parsed from `#[with_builders(...)]`
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    into: bool,
}

impl FieldOptions {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("with_builders"))
        {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                } else if meta.path.is_ident("into") {
                    options.into = true;
                } else {
                    return Err(meta.error("expected `skip` or `into`"));
                }
                Ok(())
            })?;
        }

        Ok(options)
    }
}

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value and return `Self`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        ));
    };

    let mut methods = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let options = FieldOptions::parse(field)?;
        if !options.skip {
            methods.extend(builder_method(field, &options));
        }
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    })
}

/// `with_<field>` for one named field
fn builder_method(field: &Field, options: &FieldOptions) -> Option<TokenStream2> {
    let name = field.ident.as_ref()?;
    let ty = &field.ty;
    let method = format_ident!("with_{}", name);
    let doc = format!("Set `{name}`.");

    let (param, value) = if options.into {
        (quote!(impl ::core::convert::Into<#ty>), quote!(value.into()))
    } else {
        (quote!(#ty), quote!(value))
    };

    Some(quote! {
        #[doc = #doc]
        #[inline]
        pub fn #method(mut self, value: #param) -> Self {
            self.#name = #value;
            self
        }
    })
}
