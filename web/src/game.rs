use clap::Args;
use minefield_core::{self as game, EngineState, GameConfig, GameSession, PointerInput};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::audio;
use crate::canvas::{Painter, context_2d};
use crate::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Pointer(PointerInput),
    NewGame,
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Text for the end-of-game modal, `None` while the game is still running.
pub(crate) const fn end_message(state: EngineState) -> Option<&'static str> {
    match state {
        EngineState::Playing => None,
        EngineState::Won => Some("You cleared the field!"),
        EngineState::Lost => Some("Boom! You hit a mine."),
    }
}

pub(crate) fn counter_text(view: &game::BoardView) -> (String, String) {
    (
        format!("Mines: {}", view.total_mines),
        format!("Flags: {}", view.flags_placed),
    )
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession<SmallRng>,
    canvas: NodeRef,
}

impl GameView {
    fn draw(&self) -> anyhow::Result<()> {
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            log::warn!("canvas not mounted yet");
            return Ok(());
        };
        let ctx = context_2d(&canvas)?;
        Painter::new(&ctx, self.session.geometry()).draw(&self.session.view())
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let session = GameSession::new(GameConfig::default(), SmallRng::seed_from_u64(seed))
            .expect("default config should be valid");

        Self {
            session,
            canvas: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Pointer(input) => {
                let turn = self.session.handle(input);
                audio::play(&turn.cues);
                if turn.ended_game() {
                    log::info!("game over: {:?}", self.session.engine().state());
                }
                turn.redraw
            }
            NewGame => {
                if let Err(err) = self.session.restart() {
                    log::error!("failed to start a new game: {}", err);
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Err(err) = self.draw() {
            log::error!("failed to draw board: {:#}", err);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = self.session.view();
        let (mine_count, flag_count) = counter_text(&board);
        let (width, height) = self.session.geometry().pixel_size();

        let onpointerdown = ctx.link().callback(|e: PointerEvent| {
            e.prevent_default();
            Pointer(PointerInput {
                button: e.button().into(),
                x: f64::from(e.offset_x()),
                y: f64::from(e.offset_y()),
            })
        });
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });

        html! {
            <div class="minefield" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <aside id="mineCount">{mine_count}</aside>
                    <button onclick={cb_new_game.clone()}>{"Restart"}</button>
                    <aside id="flagCount">{flag_count}</aside>
                </nav>
                <canvas
                    ref={self.canvas.clone()}
                    width={width.to_string()}
                    height={height.to_string()}
                    {onpointerdown}
                />
                if let Some(message) = end_message(board.state) {
                    <Modal>
                        <dialog open={true} class="game-over">
                            <p>{message}</p>
                            <button onclick={cb_new_game}>{"Play again"}</button>
                        </dialog>
                    </Modal>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_message_only_when_finished() {
        assert_eq!(end_message(EngineState::Playing), None);
        assert!(end_message(EngineState::Won).is_some());
        assert!(end_message(EngineState::Lost).is_some());
    }

    #[test]
    fn counters_show_total_mines_and_flags() {
        let layout = game::MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut engine = game::PlayEngine::new(layout);
        engine.toggle_flag((1, 1));

        let (mines, flags) = counter_text(&game::BoardView::from_engine(&engine));

        assert_eq!(mines, "Mines: 1");
        assert_eq!(flags, "Flags: 1");
    }
}
