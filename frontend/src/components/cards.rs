use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{HtmlElement, MouseEvent};

use crate::config::SiteConfig;
use crate::dom::{listen, set_styles, style_on, Page};
use crate::error::SiteResult;

const CARD_HOVER: &[(&str, &str)] = &[
    ("transform", "translateY(-8px)"),
    ("box-shadow", "0 20px 40px rgba(0, 0, 0, 0.3)"),
];
const CARD_REST: &[(&str, &str)] = &[("transform", "translateY(0)"), ("box-shadow", "")];

/// Press-then-rebound feedback on the play button. The button stays centred
/// on its anchor, so the translate is kept alongside the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayPress {
    Pressed,
    Rebound,
}

impl PlayPress {
    pub fn transform(self) -> &'static str {
        match self {
            PlayPress::Pressed => "translate(-50%, -50%) scale(0.9)",
            PlayPress::Rebound => "translate(-50%, -50%) scale(1.1)",
        }
    }
}

pub fn init_cards(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let cards: Vec<HtmlElement> = page.query_all(config.cards)?;
    for card in &cards {
        style_on(card, "mouseenter", CARD_HOVER)?;
        style_on(card, "mouseleave", CARD_REST)?;
    }
    debug!("Card hover attached to {} cards", cards.len());
    Ok(())
}

pub fn init_play_button(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let Some(button) = page.query::<HtmlElement>(config.play_button)? else {
        debug!("Play button not found, skipping");
        return Ok(());
    };

    let target = button.clone();
    let rebound_ms = config.play_rebound_ms;
    listen(&button, "click", move |_: MouseEvent| {
        info!("Play button clicked, no video player attached");
        set_styles(&target, &[("transform", PlayPress::Pressed.transform())]);

        let target = target.clone();
        Timeout::new(rebound_ms, move || {
            set_styles(&target, &[("transform", PlayPress::Rebound.transform())]);
        })
        .forget();
    })?;

    debug!("Play button attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_shrinks_then_rebound_overshoots() {
        assert!(PlayPress::Pressed.transform().ends_with("scale(0.9)"));
        assert!(PlayPress::Rebound.transform().ends_with("scale(1.1)"));
    }

    #[test]
    fn press_keeps_the_button_centred() {
        for press in [PlayPress::Pressed, PlayPress::Rebound] {
            assert!(press.transform().starts_with("translate(-50%, -50%)"));
        }
    }

    #[test]
    fn resting_card_clears_its_shadow() {
        assert!(CARD_REST.contains(&("box-shadow", "")));
        assert!(CARD_HOVER.contains(&("transform", "translateY(-8px)")));
    }
}
