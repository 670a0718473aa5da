use minefield_core::Cue;
use wasm_bindgen::JsCast;
use web_sys::HtmlMediaElement;

/// Id of the `<audio>` element that plays `cue`.
pub(crate) const fn element_id(cue: Cue) -> &'static str {
    match cue {
        Cue::Open => "openSound",
        Cue::Flag => "flagSound",
        Cue::Win => "winSound",
        Cue::Lose => "mineSound",
    }
}

/// Rewinds and plays each cue's element. Pages without the elements stay silent.
pub(crate) fn play(cues: &[Cue]) {
    let document = gloo::utils::document();
    for &cue in cues {
        let Some(element) = document
            .get_element_by_id(element_id(cue))
            .and_then(|element| element.dyn_into::<HtmlMediaElement>().ok())
        else {
            log::trace!("no audio element for {:?}", cue);
            continue;
        };

        element.set_current_time(0.0);
        // autoplay policies may reject the promise, sound is best-effort
        if let Err(err) = element.play() {
            log::debug!("could not play {:?}: {:?}", cue, err);
        }
    }
}
