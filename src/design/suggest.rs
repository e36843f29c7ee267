use crate::design::color::Color;
use crate::design::state::{BacksplashPattern, CountertopMaterial, DesignPatch, Flooring, WallTexture};
use crate::foundation::math::SplitMix64;

/// A canned design suggestion: a title, a blurb, and a partial state to merge.
#[derive(Clone, Debug)]
pub struct Suggestion {
    /// Short display title.
    pub title: &'static str,
    /// Human-readable description shown alongside the preset.
    pub description: &'static str,
    /// Patch to shallow-merge into the current [`crate::DesignState`].
    pub patch: DesignPatch,
}

/// The finite list of built-in suggestions.
pub fn suggestions() -> &'static [Suggestion] {
    use std::sync::OnceLock;

    static LIST: OnceLock<Vec<Suggestion>> = OnceLock::new();
    LIST.get_or_init(build_suggestions).as_slice()
}

/// Uniform random pick from [`suggestions`].
pub fn random_suggestion(rng: &mut SplitMix64) -> &'static Suggestion {
    let list = suggestions();
    &list[rng.next_index(list.len())]
}

fn build_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            title: "Sage Retreat",
            description: "Soft sage green walls for a modern, calming aesthetic with warm wood tones.",
            patch: DesignPatch {
                wall_color: Some(Color::rgb(0x9f, 0xbc, 0x8f)),
                countertop: Some(CountertopMaterial::Wood),
                flooring: Some(Flooring::Oak),
                ..DesignPatch::default()
            },
        },
        Suggestion {
            title: "Contemporary Luxe",
            description: "Crisp white with marble texture for a luxury contemporary look.",
            patch: DesignPatch {
                wall_color: Some(Color::rgb(0xff, 0xff, 0xff)),
                wall_texture: Some(WallTexture::Marble),
                countertop: Some(CountertopMaterial::Marble),
                backsplash: Some(BacksplashPattern::Marble),
                ..DesignPatch::default()
            },
        },
        Suggestion {
            title: "Cozy Traditional",
            description: "Warm cream with wood grain texture for a cozy, traditional kitchen feel.",
            patch: DesignPatch {
                wall_color: Some(Color::rgb(0xf5, 0xde, 0xb3)),
                wall_texture: Some(WallTexture::Wood),
                cabinet_style: Some(crate::design::state::CabinetStyle::Traditional),
                flooring: Some(Flooring::Walnut),
                ..DesignPatch::default()
            },
        },
        Suggestion {
            title: "Scandinavian Clean",
            description: "Light gray with subway tile for a clean, Scandinavian design.",
            patch: DesignPatch {
                wall_color: Some(Color::rgb(0xd3, 0xd3, 0xd3)),
                backsplash: Some(BacksplashPattern::Subway),
                backsplash_enabled: Some(true),
                countertop: Some(CountertopMaterial::Quartz),
                ..DesignPatch::default()
            },
        },
        Suggestion {
            title: "Coastal Fresh",
            description: "Soft blue with matte paint texture for a coastal, refreshing atmosphere.",
            patch: DesignPatch {
                wall_color: Some(Color::rgb(0xad, 0xd8, 0xe6)),
                wall_texture: Some(WallTexture::Paint),
                flooring: Some(Flooring::Tile),
                ..DesignPatch::default()
            },
        },
        Suggestion {
            title: "Timeless Beige",
            description: "Warm beige that works beautifully with natural lighting for a timeless design.",
            patch: DesignPatch {
                wall_color: Some(Color::rgb(0xf5, 0xe6, 0xd3)),
                brightness: Some(110),
                ..DesignPatch::default()
            },
        },
    ]
}
