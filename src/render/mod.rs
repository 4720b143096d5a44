//! DOM presentation layer
//!
//! Purely reactive: each frame renders a `Snapshot` into positioned sprite
//! elements, HUD text, and overlay visibility. Holds no game logic and never
//! mutates simulation state.

use std::collections::HashMap;

use web_sys::{Document, Element};

use crate::consts::*;
use crate::sim::Snapshot;

/// Minimap footprint in pixels
const MINIMAP_WIDTH: f32 = 80.0;
const MINIMAP_HEIGHT: f32 = 50.0;
/// Inventory slots shown on screen (full history stays in the sim)
const INVENTORY_SLOTS: usize = 4;

/// Sprite asset lookup. Keys with no shipped image render nothing rather
/// than erroring, so a bad key degrades to an invisible sprite.
pub fn sprite_src(key: &str) -> Option<&'static str> {
    Some(match key {
        "player" => "/sprites/ox-wagon.png",
        "trollface" => "/sprites/memes/trollface.png",
        "doge" => "/sprites/memes/doge.png",
        "pepe" => "/sprites/memes/pepe.png",
        "nyan" => "/sprites/memes/rainbow.png",
        "rickroll" => "/sprites/memes/tunes.png",
        "stonks" => "/sprites/memes/pump.png",
        "distracted" => "/sprites/memes/star.png",
        "drake" => "/sprites/memes/drake.png",
        _ => return None,
    })
}

/// Renders snapshots into the page. Sprite elements are created lazily and
/// keyed by entity id so unchanged memes keep their DOM nodes.
pub struct DomRenderer {
    document: Document,
    arena: Element,
    player: Option<Element>,
    meme_nodes: HashMap<u32, Element>,
}

impl DomRenderer {
    /// Attach to the `#arena` container. `None` when the page has no arena.
    pub fn new(document: Document) -> Option<Self> {
        let arena = document.get_element_by_id("arena")?;
        Some(Self {
            document,
            arena,
            player: None,
            meme_nodes: HashMap::new(),
        })
    }

    pub fn render(&mut self, snap: &Snapshot) {
        self.render_player(snap);
        self.render_memes(snap);
        self.render_hud(snap);
        self.render_overlays(snap);
        self.render_inventory(snap);
        self.render_minimap(snap);
    }

    fn make_sprite(&self, key: &str, size: f32) -> Option<Element> {
        let src = sprite_src(key)?;
        let img = self.document.create_element("img").ok()?;
        let _ = img.set_attribute("class", "sprite");
        let _ = img.set_attribute("src", src);
        let _ = img.set_attribute("alt", key);
        let _ = img.set_attribute("width", &(size as u32).to_string());
        let _ = img.set_attribute("height", &(size as u32).to_string());
        let _ = self.arena.append_child(&img);
        Some(img)
    }

    fn place(el: &Element, x: f32, y: f32) {
        let _ = el.set_attribute(
            "style",
            &format!("position:absolute;left:{x}px;top:{y}px;pointer-events:none;"),
        );
    }

    fn render_player(&mut self, snap: &Snapshot) {
        if self.player.is_none() {
            self.player = self.make_sprite("player", PLAYER_SIZE);
        }
        if let Some(el) = &self.player {
            Self::place(el, snap.player.x, snap.player.y);
        }
    }

    fn render_memes(&mut self, snap: &Snapshot) {
        // Drop nodes for memes that despawned or were collected
        self.meme_nodes.retain(|id, el| {
            let live = snap.memes.iter().any(|m| m.id == *id);
            if !live {
                el.remove();
            }
            live
        });

        for meme in &snap.memes {
            if !self.meme_nodes.contains_key(&meme.id) {
                if let Some(el) = self.make_sprite(meme.kind.as_str(), MEME_SIZE) {
                    self.meme_nodes.insert(meme.id, el);
                }
            }
            if let Some(el) = self.meme_nodes.get(&meme.id) {
                Self::place(el, meme.pos.x, meme.pos.y);
            }
        }
    }

    fn render_hud(&self, snap: &Snapshot) {
        if let Some(el) = self
            .document
            .query_selector("#hud-health .hud-value")
            .ok()
            .flatten()
        {
            let filled = snap.health as usize;
            let empty = snap.health_max.saturating_sub(snap.health) as usize;
            el.set_text_content(Some(&format!("{}{}", "█".repeat(filled), "░".repeat(empty))));
        }

        if let Some(el) = self
            .document
            .query_selector("#hud-score .hud-value")
            .ok()
            .flatten()
        {
            el.set_text_content(Some(&format!("{:03}", snap.memes_collected)));
        }

        if let Some(el) = self.document.get_element_by_id("hud-boost") {
            let _ = el.set_attribute(
                "class",
                if snap.speed_boost {
                    "hud-item"
                } else {
                    "hud-item hidden"
                },
            );
        }
    }

    fn render_overlays(&self, snap: &Snapshot) {
        self.set_visible("title-screen", !snap.started);
        self.set_visible("pause-menu", snap.paused);
        self.set_visible("game-over", snap.over);
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    fn render_inventory(&self, snap: &Snapshot) {
        if let Some(el) = self.document.get_element_by_id("inventory-slots") {
            let start = snap.inventory.len().saturating_sub(INVENTORY_SLOTS);
            let html: String = snap.inventory[start..]
                .iter()
                .filter_map(|kind| {
                    sprite_src(kind.as_str()).map(|src| {
                        format!(
                            "<img class=\"slot\" src=\"{}\" alt=\"{}\">",
                            src,
                            kind.as_str()
                        )
                    })
                })
                .collect();
            el.set_inner_html(&html);
        }
    }

    fn render_minimap(&self, snap: &Snapshot) {
        if let Some(el) = self.document.get_element_by_id("minimap") {
            let sx = MINIMAP_WIDTH / ARENA_WIDTH;
            let sy = MINIMAP_HEIGHT / ARENA_HEIGHT;
            let mut html = format!(
                "<div class=\"map-player\" style=\"left:{:.0}px;top:{:.0}px\"></div>",
                snap.player.x * sx,
                snap.player.y * sy
            );
            for meme in &snap.memes {
                html.push_str(&format!(
                    "<div class=\"map-meme\" style=\"left:{:.0}px;top:{:.0}px\"></div>",
                    meme.pos.x * sx,
                    meme.pos.y * sy
                ));
            }
            el.set_inner_html(&html);
        }

        if let Some(el) = self.document.get_element_by_id("minimap-coords") {
            el.set_text_content(Some(&format!(
                "{},{}",
                snap.player.x.floor() as i32,
                snap.player.y.floor() as i32
            )));
        }
    }
}
