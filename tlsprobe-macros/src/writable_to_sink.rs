use crate::get_repr_type;
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields};

fn impl_writable_to_sink_struct(data_struct: &DataStruct) -> TokenStream {
    match &data_struct.fields {
        Fields::Named(fields) => {
            let calls = fields.named.iter().map(|f| {
                let ident = f.ident.as_ref().unwrap();
                let ty = &f.ty;

                quote! { <#ty as crate::tls::WritableToSink>::write(&self.#ident, buffer)?; }
            });
            quote! { #(#calls)* Ok(()) }
        }
        Fields::Unnamed(fields) => {
            let calls = fields.unnamed.iter().enumerate().map(|(i, f)| {
                let ty = &f.ty;
                let idx = syn::Index::from(i);
                quote! { <#ty as crate::tls::WritableToSink>::write(&self.#idx, buffer)?; }
            });
            quote! { #(#calls)* Ok(()) }
        }
        Fields::Unit => {
            quote! { Ok(()) }
        }
    }
}

fn impl_writable_to_sink_enum(data_enum: &DataEnum, ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let repr = get_repr_type(ast);

    if repr.is_none() {
        return quote! { compile_error!("WritableToSink requires a repr attribute with an unsigned integer type on enums."); };
    }

    let repr = repr.unwrap();
    let mut cases = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let Some((_, disc)) = &variant.discriminant else {
            return quote! { compile_error!("WritableToSink requires all enum variants to have a discriminant"); };
        };

        if !variant.fields.is_empty() {
            return quote! { compile_error!("WritableToSink requires enum variants without fields"); };
        }

        cases.push(quote! { #name::#variant_name => {
            <#repr as crate::tls::WritableToSink>::write(&#disc, buffer)?;
        } });
    }

    quote! {
        match self {
            #(#cases)*
        }
        Ok(())
    }
}

pub fn impl_writable_to_sink(ast: DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let body = match &ast.data {
        Data::Struct(data_struct) => impl_writable_to_sink_struct(data_struct),
        Data::Enum(data_enum) => impl_writable_to_sink_enum(data_enum, &ast),
        _ => {
            return quote! {
                compile_error!("WritableToSink only works on structs and enums");
            };
        }
    };

    let generics = ast.generics.to_token_stream();
    let generics_where = ast.generics.where_clause.clone();

    quote! {
        impl #generics crate::tls::WritableToSink for #name #generics #generics_where {
            fn write(&self, buffer: &mut impl crate::tls::Sink) -> crate::tls::error::Result<()> {
                #body
            }
        }
    }
}
