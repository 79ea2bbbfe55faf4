use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct declaring one field per channel.
///
/// The channel order of the generated `Model::to_channels` and
/// `Model::channel_mut` follows the declaration order of the fields.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each channel of the representation.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != input.fields.len() {
        return quote! {
            compile_error!("Model channels must be named fields.")
        }
        .into();
    }

    let count = field_names.len();
    let indices = 0..count;

    // Channels are always accessible.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // TODO: Check if the derives are already there.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// The number of channels in this model.
            pub const CHANNELS: usize = #count;

            /// Create a new model from its channels.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self { #(#field_names),* }
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }

        impl crate::models::Model for #struct_name
        where
            Self: crate::color::HasRepresentation,
        {
            fn to_channels(&self) -> crate::color::Channels {
                crate::color::Channels::from_slice(&[#(self.#field_names),*])
            }

            fn channel_mut(&mut self, index: usize) -> Option<&mut crate::color::Component> {
                match index {
                    #(#indices => Some(&mut self.#field_names),)*
                    _ => None,
                }
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
