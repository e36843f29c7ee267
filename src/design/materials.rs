use crate::design::color::Color;
use crate::design::state::{CountertopMaterial, Flooring};

/// Visual parameters for a countertop finish.
///
/// `colors` is ordered light-to-dark; the band fill uses the midtone and the
/// texture generators pick from the ends.
#[derive(Clone, Copy, Debug)]
pub struct CountertopSpec {
    /// Human-readable finish name.
    pub name: &'static str,
    /// Representative colors, `[light, mid, dark]`.
    pub colors: [Color; 3],
}

impl CountertopSpec {
    /// Midtone color used for the band fill.
    pub fn midtone(&self) -> Color {
        self.colors[1]
    }
}

/// Visual parameters for a floor finish.
#[derive(Clone, Copy, Debug)]
pub struct FlooringSpec {
    /// Human-readable finish name.
    pub name: &'static str,
    /// Gradient color at the top of the floor band.
    pub top: Color,
    /// Gradient color at the bottom of the floor band.
    pub bottom: Color,
}

/// Neutral fill used when a countertop tag has no table entry.
pub const COUNTERTOP_FALLBACK: Color = Color::rgb(0xc9, 0xc2, 0xb8);

/// Neutral fill used when a flooring tag has no table entry.
pub const FLOOR_FALLBACK: Color = Color::rgb(0xb0, 0xa8, 0x9f);

const GRANITE: CountertopSpec = CountertopSpec {
    name: "Granite",
    colors: [
        Color::rgb(0x9a, 0x9a, 0x9a),
        Color::rgb(0x6e, 0x6e, 0x6e),
        Color::rgb(0x3c, 0x3c, 0x3c),
    ],
};

const QUARTZ: CountertopSpec = CountertopSpec {
    name: "Quartz",
    colors: [
        Color::rgb(0xf2, 0xef, 0xe9),
        Color::rgb(0xe0, 0xdb, 0xd2),
        Color::rgb(0xb8, 0xb2, 0xa6),
    ],
};

const MARBLE: CountertopSpec = CountertopSpec {
    name: "Marble",
    colors: [
        Color::rgb(0xfa, 0xfa, 0xf8),
        Color::rgb(0xe8, 0xe6, 0xe1),
        Color::rgb(0xa8, 0xa4, 0x9c),
    ],
};

const WOOD: CountertopSpec = CountertopSpec {
    name: "Butcher Block",
    colors: [
        Color::rgb(0xd2, 0xa5, 0x6d),
        Color::rgb(0xb5, 0x83, 0x4b),
        Color::rgb(0x7a, 0x52, 0x2a),
    ],
};

const OAK: FlooringSpec = FlooringSpec {
    name: "Oak",
    top: Color::rgb(0xd4, 0xaf, 0x37),
    bottom: Color::rgb(0xaa, 0x8c, 0x2a),
};

const WALNUT: FlooringSpec = FlooringSpec {
    name: "Walnut",
    top: Color::rgb(0x6b, 0x4a, 0x2f),
    bottom: Color::rgb(0x4a, 0x32, 0x1e),
};

const TILE: FlooringSpec = FlooringSpec {
    name: "Tile",
    top: Color::rgb(0xd8, 0xd8, 0xd4),
    bottom: Color::rgb(0xb4, 0xb4, 0xae),
};

const CONCRETE: FlooringSpec = FlooringSpec {
    name: "Concrete",
    top: Color::rgb(0xa9, 0xa9, 0xa9),
    bottom: Color::rgb(0x83, 0x83, 0x83),
};

/// Look up the table entry for a countertop finish.
///
/// `Unknown` has no entry; the layer then draws its base band with
/// [`COUNTERTOP_FALLBACK`] and skips the texture step.
pub fn countertop_spec(material: CountertopMaterial) -> Option<&'static CountertopSpec> {
    match material {
        CountertopMaterial::Granite => Some(&GRANITE),
        CountertopMaterial::Quartz => Some(&QUARTZ),
        CountertopMaterial::Marble => Some(&MARBLE),
        CountertopMaterial::Wood => Some(&WOOD),
        CountertopMaterial::Unknown => None,
    }
}

/// Look up the table entry for a floor finish.
///
/// `Unknown` has no entry; the layer then draws a flat [`FLOOR_FALLBACK`] fill
/// and skips the tile grid.
pub fn flooring_spec(flooring: Flooring) -> Option<&'static FlooringSpec> {
    match flooring {
        Flooring::Oak => Some(&OAK),
        Flooring::Walnut => Some(&WALNUT),
        Flooring::Tile => Some(&TILE),
        Flooring::Concrete => Some(&CONCRETE),
        Flooring::Unknown => None,
    }
}
