use clap::Parser;
use wasm_bindgen::prelude::*;

mod audio;
mod canvas;
mod game;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Reads debug flags from the URL hash, e.g. `#-vv&--seed&1234`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).unwrap_or_default();
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_and_verbosity_from_hash() {
        let args = Args::from_location_hash("#-vv&--seed&1234").unwrap();

        assert_eq!(args.game.seed, Some(1234));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.seed, None);
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::from_location_hash("#--seed&abc").is_err());
    }
}
