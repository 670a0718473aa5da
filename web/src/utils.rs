use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attach the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

/// Wraps a thrown JavaScript value so it can travel through `anyhow`.
pub(crate) fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", err)
}
