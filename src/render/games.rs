//! Game cards.

use crate::content::{Game, GamesConfig, default_games, present};
use crate::dom::{Document, Element, Mutation, Target, TargetLookup};

/// Image shown when a game has no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "assets/images/game-placeholder.jpg";

/// Background substituted when a thumbnail fails to load.
pub const FALLBACK_BACKGROUND: &str = "linear-gradient(45deg, var(--primary), var(--accent))";

/// Builds the card for one game.
///
/// Missing fields render as empty text. Names and descriptions are kept as
/// text nodes, never parsed as markup.
pub fn game_card(game: &Game) -> Element {
    let name = game.name.as_deref().unwrap_or_default();
    let thumbnail = present(&game.thumbnail).unwrap_or(PLACEHOLDER_THUMBNAIL);

    let image = Element::new("img")
        .attr("src", thumbnail)
        .attr("alt", name)
        .class("game-thumbnail")
        .attr(
            "onerror",
            format!("this.style.background='{}'; this.src='';", FALLBACK_BACKGROUND),
        );

    let content = Element::new("div")
        .class("game-content")
        .child(Element::new("h4").class("game-title").text(name))
        .child(
            Element::new("p")
                .class("game-description")
                .text(game.description.as_deref().unwrap_or_default()),
        )
        .child(Element::new("span").class("game-difficulty").text(format!(
            "Difficulty: {}",
            game.difficulty.as_deref().unwrap_or_default()
        )))
        .child(
            Element::new("a")
                .attr("href", game.url.as_deref().unwrap_or_default())
                .class("game-link")
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text("Play Game"),
        );

    Element::new("div")
        .class("game-card")
        .attr("role", "listitem")
        .child(image)
        .child(content)
}

/// Replaces the games container with one card per game, in order.
pub fn games_mutations(games: &[Game], targets: &dyn TargetLookup) -> Vec<Mutation> {
    if !targets.has(Target::GamesContainer) {
        return Vec::new();
    }
    vec![Mutation::ReplaceChildren {
        target: Target::GamesContainer,
        children: games.iter().map(game_card).collect(),
    }]
}

/// Renders the games of a loaded document. A document without a `games`
/// section leaves the container untouched.
pub fn render_games(config: &GamesConfig, targets: &dyn TargetLookup) -> Vec<Mutation> {
    match config.games.as_deref() {
        Some(games) => games_mutations(games, targets),
        None => Vec::new(),
    }
}

/// Renders the built-in default games.
pub fn default_games_mutations(targets: &dyn TargetLookup) -> Vec<Mutation> {
    games_mutations(&default_games(), targets)
}

/// Swaps a broken thumbnail for the gradient background.
pub fn recover_thumbnail(image: &mut Element) {
    image.set_attribute("style", format!("background: {};", FALLBACK_BACKGROUND));
    image.set_attribute("src", "");
}

/// Handles a thumbnail load failure for the card at `index`.
/// Returns false if there is no such card.
pub fn report_thumbnail_error(document: &mut Document, index: usize) -> bool {
    let Some(container) = document.element_mut(Target::GamesContainer) else {
        return false;
    };
    let card = container
        .children
        .iter_mut()
        .filter_map(|c| match c {
            crate::dom::Node::Element(e) => Some(e),
            crate::dom::Node::Text(_) => None,
        })
        .nth(index);

    match card.and_then(|c| c.find_class_mut("game-thumbnail")) {
        Some(image) => {
            recover_thumbnail(image);
            true
        }
        None => false,
    }
}

/// Titles of the rendered cards, in container order.
#[cfg(test)]
pub(crate) fn rendered_titles(document: &Document) -> Vec<String> {
    document
        .element(Target::GamesContainer)
        .map(|container| {
            container
                .child_elements()
                .filter(|e| e.has_class("game-card"))
                .map(|card| {
                    card.find_class("game-title")
                        .map(Element::text_content)
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default()
}
