//! Built-in template catalog.
//!
//! Classic templates with their default text regions, keyed by slug.
//! The batch generation flow picks templates from here without repeats
//! within one batch; the already-used set is threaded explicitly rather
//! than captured in a closure.

use std::collections::HashSet;
use std::sync::OnceLock;

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::template::{TemplateDescriptor, TextLayerSpec};

fn layer(x: Option<f32>, y: Option<f32>, width: Option<f32>) -> TextLayerSpec {
    TextLayerSpec {
        x,
        y,
        width,
        height: None,
        text: String::new(),
    }
}

/// A default-position layer carrying prefilled caption text (the famous
/// fixed line of the template).
fn caption(y: f32, text: &str) -> TextLayerSpec {
    TextLayerSpec {
        y: Some(y),
        text: text.to_string(),
        ..TextLayerSpec::default()
    }
}

/// The ubiquitous top/bottom caption pair.
fn top_bottom() -> Vec<TextLayerSpec> {
    vec![layer(None, Some(5.0), None), layer(None, Some(85.0), None)]
}

fn template(id: &str, name: &str, layers: Vec<TextLayerSpec>) -> TemplateDescriptor {
    TemplateDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("imgs/templates/{id}.webp"),
        layers,
    }
}

// A couple of templates only exist as PNG assets.
fn template_png(id: &str, name: &str, layers: Vec<TextLayerSpec>) -> TemplateDescriptor {
    TemplateDescriptor {
        image_url: format!("imgs/templates/{id}.png"),
        ..template(id, name, layers)
    }
}

static CATALOG: OnceLock<Vec<TemplateDescriptor>> = OnceLock::new();

/// All built-in templates, in popularity order.
pub fn list() -> &'static [TemplateDescriptor] {
    CATALOG.get_or_init(|| {
        vec![
            template(
                "drake-hotline-bling",
                "Drake Hotline Bling",
                vec![layer(None, Some(15.0), None), layer(None, Some(65.0), None)],
            ),
            template(
                "distracted-boyfriend",
                "Distracted Boyfriend",
                vec![
                    layer(Some(8.0), Some(75.0), Some(25.0)),
                    layer(Some(38.0), Some(75.0), Some(25.0)),
                    layer(Some(68.0), Some(75.0), Some(25.0)),
                ],
            ),
            template(
                "two-buttons",
                "Two Buttons",
                vec![
                    layer(Some(8.0), Some(8.0), Some(35.0)),
                    layer(Some(52.0), Some(8.0), Some(35.0)),
                ],
            ),
            template(
                "change-my-mind",
                "Change My Mind",
                vec![layer(Some(18.0), Some(58.0), Some(42.0))],
            ),
            template(
                "expanding-brain",
                "Expanding Brain",
                vec![
                    layer(Some(3.0), Some(3.0), Some(45.0)),
                    layer(Some(3.0), Some(28.0), Some(45.0)),
                    layer(Some(3.0), Some(53.0), Some(45.0)),
                    layer(Some(3.0), Some(78.0), Some(45.0)),
                ],
            ),
            template(
                "batman-slapping-robin",
                "Batman Slapping Robin",
                vec![
                    layer(Some(5.0), Some(5.0), Some(40.0)),
                    layer(Some(55.0), Some(5.0), Some(40.0)),
                ],
            ),
            template(
                "uno-draw-25",
                "UNO Draw 25 Cards",
                vec![layer(Some(5.0), Some(15.0), Some(40.0))],
            ),
            template(
                "running-away-balloon",
                "Running Away Balloon",
                vec![
                    layer(Some(5.0), Some(5.0), Some(30.0)),
                    layer(Some(35.0), Some(35.0), Some(30.0)),
                    layer(Some(65.0), Some(5.0), Some(30.0)),
                ],
            ),
            template("mocking-spongebob", "Mocking Spongebob", top_bottom()),
            template(
                "left-exit-12",
                "Left Exit 12 Off Ramp",
                vec![
                    layer(Some(35.0), Some(15.0), Some(25.0)),
                    layer(Some(65.0), Some(35.0), Some(30.0)),
                    layer(Some(10.0), Some(70.0), Some(30.0)),
                ],
            ),
            template(
                "is-this-a-pigeon",
                "Is This A Pigeon?",
                vec![
                    layer(Some(10.0), Some(5.0), Some(35.0)),
                    layer(Some(45.0), Some(35.0), Some(25.0)),
                    layer(None, Some(85.0), None),
                ],
            ),
            template(
                "inhaling-seagull",
                "Inhaling Seagull",
                vec![
                    layer(Some(55.0), Some(3.0), Some(40.0)),
                    layer(Some(55.0), Some(28.0), Some(40.0)),
                    layer(Some(55.0), Some(53.0), Some(40.0)),
                    layer(Some(55.0), Some(78.0), Some(40.0)),
                ],
            ),
            template(
                "woman-yelling-at-cat",
                "Woman Yelling at Cat",
                vec![
                    layer(Some(5.0), Some(5.0), Some(45.0)),
                    layer(Some(55.0), Some(5.0), Some(40.0)),
                ],
            ),
            template(
                "american-chopper",
                "American Chopper Argument",
                vec![
                    layer(Some(55.0), Some(2.0), Some(40.0)),
                    layer(Some(55.0), Some(22.0), Some(40.0)),
                    layer(Some(55.0), Some(42.0), Some(40.0)),
                    layer(Some(55.0), Some(62.0), Some(40.0)),
                    layer(Some(55.0), Some(82.0), Some(40.0)),
                ],
            ),
            template(
                "epic-handshake",
                "Epic Handshake",
                vec![
                    layer(Some(5.0), Some(5.0), Some(30.0)),
                    layer(Some(35.0), Some(70.0), Some(30.0)),
                    layer(Some(65.0), Some(5.0), Some(30.0)),
                ],
            ),
            template("hide-the-pain-harold", "Hide the Pain Harold", top_bottom()),
            template_png(
                "tuxedo-winnie-pooh",
                "Tuxedo Winnie The Pooh",
                vec![
                    layer(Some(55.0), Some(15.0), Some(40.0)),
                    layer(Some(55.0), Some(65.0), Some(40.0)),
                ],
            ),
            template("unsettled-tom", "Unsettled Tom", top_bottom()),
            template(
                "blank-nut-button",
                "Blank Nut Button",
                vec![layer(Some(5.0), Some(5.0), Some(45.0))],
            ),
            template(
                "boardroom-meeting",
                "Boardroom Meeting Suggestion",
                vec![
                    layer(Some(5.0), Some(5.0), Some(25.0)),
                    layer(Some(35.0), Some(5.0), Some(20.0)),
                    layer(Some(60.0), Some(5.0), Some(20.0)),
                    layer(Some(80.0), Some(30.0), Some(18.0)),
                ],
            ),
            template(
                "one-does-not-simply",
                "One Does Not Simply",
                vec![
                    caption(5.0, "ONE DOES NOT SIMPLY"),
                    layer(None, Some(85.0), None),
                ],
            ),
            template("surprised-pikachu", "Surprised Pikachu", top_bottom()),
            template("roll-safe", "Roll Safe Think About It", top_bottom()),
            template(
                "who-killed-hannibal",
                "Who Killed Hannibal",
                vec![
                    layer(Some(55.0), Some(5.0), Some(40.0)),
                    layer(Some(55.0), Some(38.0), Some(40.0)),
                    layer(Some(55.0), Some(72.0), Some(40.0)),
                ],
            ),
            template(
                "scroll-of-truth",
                "The Scroll Of Truth",
                vec![layer(Some(15.0), Some(45.0), Some(35.0))],
            ),
            template("waiting-skeleton", "Waiting Skeleton", top_bottom()),
            template(
                "hard-to-swallow-pills",
                "Hard To Swallow Pills",
                vec![layer(Some(55.0), Some(55.0), Some(40.0))],
            ),
            template(
                "trump-bill-signing",
                "Trump Bill Signing",
                vec![layer(Some(25.0), Some(55.0), Some(50.0))],
            ),
            template(
                "the-rock-driving",
                "The Rock Driving",
                vec![
                    layer(Some(55.0), Some(10.0), Some(40.0)),
                    layer(Some(55.0), Some(60.0), Some(40.0)),
                ],
            ),
            template("disaster-girl", "Disaster Girl", top_bottom()),
            template(
                "bernie-asking",
                "Bernie I Am Once Again Asking",
                vec![layer(None, Some(85.0), None)],
            ),
            template("monkey-puppet", "Monkey Puppet", top_bottom()),
            template(
                "spongebob-imma-head-out",
                "Spongebob Ight Imma Head Out",
                vec![layer(None, Some(5.0), None)],
            ),
            template("x-x-everywhere", "X, X Everywhere", top_bottom()),
            template("yall-got-any-more", "Y'all Got Any More Of", top_bottom()),
            template(
                "futurama-fry",
                "Futurama Fry / Not Sure If",
                vec![caption(5.0, "NOT SURE IF"), layer(None, Some(85.0), None)],
            ),
            template(
                "ancient-aliens",
                "Ancient Aliens",
                vec![layer(None, Some(5.0), None), caption(85.0, "ALIENS")],
            ),
            template("oprah-you-get-a-car", "Oprah You Get A Car", top_bottom()),
            template(
                "finding-neverland",
                "Finding Neverland",
                vec![
                    layer(Some(55.0), Some(5.0), Some(40.0)),
                    layer(Some(55.0), Some(38.0), Some(40.0)),
                    layer(Some(55.0), Some(72.0), Some(40.0)),
                ],
            ),
            template(
                "third-world-skeptical-kid",
                "Third World Skeptical Kid",
                top_bottom(),
            ),
            template("that-would-be-great", "That Would Be Great", top_bottom()),
            template("dont-you-squidward", "Don't You Squidward", top_bottom()),
            template(
                "sad-pablo-escobar",
                "Sad Pablo Escobar",
                vec![
                    layer(Some(55.0), Some(5.0), Some(40.0)),
                    layer(Some(55.0), Some(38.0), Some(40.0)),
                    layer(Some(55.0), Some(72.0), Some(40.0)),
                ],
            ),
            template("doge", "Doge", top_bottom()),
            template(
                "marked-safe-from",
                "Marked Safe From",
                vec![layer(Some(25.0), Some(35.0), Some(50.0))],
            ),
            template("star-wars-yoda", "Star Wars Yoda", top_bottom()),
            template(
                "third-world-success-kid",
                "Third World Success Kid",
                top_bottom(),
            ),
            template(
                "evil-kermit",
                "Evil Kermit",
                vec![
                    layer(Some(5.0), Some(5.0), Some(45.0)),
                    layer(Some(55.0), Some(5.0), Some(40.0)),
                ],
            ),
            template_png(
                "panik-kalm-panik",
                "Panik Kalm Panik",
                vec![
                    layer(Some(5.0), Some(5.0), Some(45.0)),
                    layer(Some(5.0), Some(38.0), Some(45.0)),
                    layer(Some(5.0), Some(72.0), Some(45.0)),
                ],
            ),
            template(
                "this-is-fine",
                "This Is Fine",
                vec![layer(None, Some(5.0), None)],
            ),
            template(
                "sleeping-shaq",
                "Sleeping Shaq",
                vec![
                    layer(Some(55.0), Some(15.0), Some(40.0)),
                    layer(Some(55.0), Some(65.0), Some(40.0)),
                ],
            ),
            template(
                "theyre-the-same-picture",
                "They're The Same Picture",
                vec![
                    layer(Some(8.0), Some(8.0), Some(35.0)),
                    layer(Some(58.0), Some(8.0), Some(35.0)),
                    layer(None, Some(85.0), None),
                ],
            ),
            template("success-kid", "Success Kid", top_bottom()),
            template("grumpy-cat", "Grumpy Cat", top_bottom()),
            template("bad-luck-brian", "Bad Luck Brian", top_bottom()),
            template("first-world-problems", "First World Problems", top_bottom()),
            template(
                "sweating-jordan-peele",
                "Sweating Jordan Peele",
                top_bottom(),
            ),
            template(
                "vince-mcmahon-reaction",
                "Vince McMahon Reaction",
                vec![
                    layer(Some(5.0), Some(3.0), Some(45.0)),
                    layer(Some(5.0), Some(28.0), Some(45.0)),
                    layer(Some(5.0), Some(53.0), Some(45.0)),
                    layer(Some(5.0), Some(78.0), Some(45.0)),
                ],
            ),
            template(
                "disappointed-black-guy",
                "Disappointed Black Guy",
                vec![
                    layer(Some(55.0), Some(15.0), Some(40.0)),
                    layer(Some(55.0), Some(65.0), Some(40.0)),
                ],
            ),
        ]
    })
}

/// Look up a template by its slug.
pub fn by_id(id: &str) -> Option<&'static TemplateDescriptor> {
    list().iter().find(|t| t.id == id)
}

/// Pick a random template not yet in `used`, recording the choice.
///
/// Returns `None` once every template has been used. The used set is an
/// explicit argument so one batch's picks stay scoped to that batch.
pub fn pick_template<R: Rng>(
    rng: &mut R,
    used: &mut HashSet<String>,
) -> Option<&'static TemplateDescriptor> {
    let picked = list()
        .iter()
        .filter(|t| !used.contains(&t.id))
        .choose(rng)?;
    used.insert(picked.id.clone());
    Some(picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_slug() {
        let t = by_id("drake-hotline-bling").unwrap();
        assert_eq!(t.name, "Drake Hotline Bling");
        assert_eq!(t.layers.len(), 2);
        assert!(by_id("no-such-template").is_none());
    }

    #[test]
    fn carries_the_full_template_table() {
        assert_eq!(list().len(), 59);
        for slug in [
            "american-chopper",
            "epic-handshake",
            "surprised-pikachu",
            "roll-safe",
            "panik-kalm-panik",
            "disappointed-black-guy",
        ] {
            assert!(by_id(slug).is_some(), "missing template {slug}");
        }
    }

    #[test]
    fn png_assets_keep_their_extension() {
        assert_eq!(
            by_id("tuxedo-winnie-pooh").unwrap().image_url,
            "imgs/templates/tuxedo-winnie-pooh.png"
        );
        assert_eq!(
            by_id("panik-kalm-panik").unwrap().image_url,
            "imgs/templates/panik-kalm-panik.png"
        );
    }

    #[test]
    fn fixed_lines_are_prefilled() {
        assert_eq!(
            by_id("one-does-not-simply").unwrap().layers[0].text,
            "ONE DOES NOT SIMPLY"
        );
        assert_eq!(by_id("futurama-fry").unwrap().layers[0].text, "NOT SURE IF");
        assert_eq!(by_id("ancient-aliens").unwrap().layers[1].text, "ALIENS");
    }

    #[test]
    fn catalog_slugs_are_unique() {
        let mut seen = HashSet::new();
        for t in list() {
            assert!(seen.insert(&t.id), "duplicate slug {}", t.id);
        }
    }

    #[test]
    fn batch_picks_never_repeat() {
        let mut rng = rand::rng();
        let mut used = HashSet::new();
        let mut picked = Vec::new();
        while let Some(t) = pick_template(&mut rng, &mut used) {
            picked.push(t.id.clone());
        }
        assert_eq!(picked.len(), list().len());
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len());
    }
}
