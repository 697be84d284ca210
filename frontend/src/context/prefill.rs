use shared::PrefillBus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PrefillProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the single prefill channel connecting every "book now" surface to
/// the booking form. The bus itself lives in `shared`; this provider just
/// hands the same instance to the whole tree.
#[function_component(PrefillProvider)]
pub fn prefill_provider(props: &PrefillProviderProps) -> Html {
    // use_state keeps one bus for the provider's lifetime; clones share it.
    let bus = use_state(PrefillBus::new);

    html! {
        <ContextProvider<PrefillBus> context={(*bus).clone()}>
            {props.children.clone()}
        </ContextProvider<PrefillBus>>
    }
}
