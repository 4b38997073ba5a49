use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Ident, ItemFn};

/// Derives `jobboard_utils::patch::Patch`, generating a `<Name>Patch` struct
/// in which every field is wrapped in a `PatchValue`.
#[proc_macro_derive(Patch)]
pub fn derive_patch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let vis = input.vis;
    let ident = input.ident;
    let patch_ident = Ident::new(&format!("{ident}Patch"), ident.span());

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Patch can only be derived for structs"); }.into();
    };

    let syn::Fields::Named(fields) = data.fields else {
        return quote! { ::core::compile_error!("Patch can only be derived for structs with named fields"); }.into();
    };

    let patch_fields = fields.named.iter().map(|field| {
        let vis = &field.vis;
        let ident = &field.ident;
        let ty = &field.ty;
        quote! { #vis #ident: ::jobboard_utils::patch::PatchValue<#ty> }
    });

    let update_fields = fields.named.iter().map(|field| {
        let ident = &field.ident;
        quote! { #ident: patch.#ident.update(self.#ident) }
    });

    let is_update_fields = fields.named.iter().map(|field| {
        let ident = &field.ident;
        quote! { || self.#ident.is_update() }
    });

    let builder_methods = fields.named.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let update_ident = Ident::new(&format!("update_{ident}"), ident.span());
        let ty = &field.ty;
        Some(quote! {
            #vis fn #update_ident(mut self, #ident: impl ::core::convert::Into<#ty>) -> Self {
                self.#ident = ::jobboard_utils::patch::PatchValue::Update(#ident.into());
                self
            }
        })
    });

    quote! {
        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::default::Default, ::core::cmp::PartialEq, ::core::cmp::Eq)]
        #vis struct #patch_ident {
            #(#patch_fields),*
        }

        impl ::jobboard_utils::patch::Patch for #ident {
            type Patch = #patch_ident;

            fn update(self, patch: Self::Patch) -> Self {
                Self { #(#update_fields),* }
            }
        }

        impl #patch_ident {
            #vis fn new() -> Self {
                Self::default()
            }

            #(#builder_methods)*

            #vis fn is_update(&self) -> bool {
                false #(#is_update_fields)*
            }
        }
    }
    .into()
}

#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    quote! {
        #[::tracing::instrument(ret(level = "trace"), #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("Call");
            #block
        }
    }
    .into()
}
