//! Fixed color palette for detection classes.
//!
//! Class ids are mapped to colors by indexing the palette modulo its length,
//! so a given class is always drawn in the same color regardless of how many
//! classes the model produces. The table reproduces the CSS3 named colors
//! used by the reference detection samples, in their original order.

use image::Rgb;

/// Number of colors in [`PALETTE`].
pub const PALETTE_SIZE: usize = 126;

/// Fixed palette of CSS3 named colors for class boxes and label tags.
pub const PALETTE: [Rgb<u8>; PALETTE_SIZE] = [
    Rgb([218, 165, 32]),  // GoldenRod
    Rgb([72, 209, 204]),  // MediumTurquoise
    Rgb([173, 255, 47]),  // GreenYellow
    Rgb([70, 130, 180]),  // SteelBlue
    Rgb([143, 188, 143]), // DarkSeaGreen
    Rgb([255, 245, 238]), // SeaShell
    Rgb([211, 211, 211]), // LightGrey
    Rgb([205, 92, 92]),   // IndianRed
    Rgb([189, 183, 107]), // DarkKhaki
    Rgb([124, 252, 0]),   // LawnGreen
    Rgb([245, 245, 245]), // WhiteSmoke
    Rgb([205, 133, 63]),  // Peru
    Rgb([240, 128, 128]), // LightCoral
    Rgb([178, 34, 34]),   // FireBrick
    Rgb([253, 245, 230]), // OldLace
    Rgb([173, 216, 230]), // LightBlue
    Rgb([112, 128, 144]), // SlateGray
    Rgb([107, 142, 35]),  // OliveDrab
    Rgb([255, 222, 173]), // NavajoWhite
    Rgb([219, 112, 147]), // PaleVioletRed
    Rgb([0, 255, 127]),   // SpringGreen
    Rgb([240, 248, 255]), // AliceBlue
    Rgb([238, 130, 238]), // Violet
    Rgb([0, 191, 255]),   // DeepSkyBlue
    Rgb([255, 0, 0]),     // Red
    Rgb([199, 21, 133]),  // MediumVioletRed
    Rgb([175, 238, 238]), // PaleTurquoise
    Rgb([255, 99, 71]),   // Tomato
    Rgb([240, 255, 255]), // Azure
    Rgb([255, 255, 0]),   // Yellow
    Rgb([255, 248, 220]), // Cornsilk
    Rgb([127, 255, 212]), // Aquamarine
    Rgb([95, 158, 160]),  // CadetBlue
    Rgb([100, 149, 237]), // CornflowerBlue
    Rgb([30, 144, 255]),  // DodgerBlue
    Rgb([128, 128, 0]),   // Olive
    Rgb([218, 112, 214]), // Orchid
    Rgb([255, 250, 205]), // LemonChiffon
    Rgb([160, 82, 45]),   // Sienna
    Rgb([255, 69, 0]),    // OrangeRed
    Rgb([255, 165, 0]),   // Orange
    Rgb([233, 150, 122]), // DarkSalmon
    Rgb([255, 0, 255]),   // Magenta
    Rgb([245, 222, 179]), // Wheat
    Rgb([0, 255, 0]),     // Lime
    Rgb([248, 248, 255]), // GhostWhite
    Rgb([106, 90, 205]),  // SlateBlue
    Rgb([0, 255, 255]),   // Aqua
    Rgb([102, 205, 170]), // MediumAquaMarine
    Rgb([119, 136, 153]), // LightSlateGrey
    Rgb([60, 179, 113]),  // MediumSeaGreen
    Rgb([244, 164, 96]),  // SandyBrown
    Rgb([154, 205, 50]),  // YellowGreen
    Rgb([221, 160, 221]), // Plum
    Rgb([255, 250, 240]), // FloralWhite
    Rgb([255, 182, 193]), // LightPink
    Rgb([216, 191, 216]), // Thistle
    Rgb([148, 0, 211]),   // DarkViolet
    Rgb([255, 192, 203]), // Pink
    Rgb([220, 20, 60]),   // Crimson
    Rgb([210, 105, 30]),  // Chocolate
    Rgb([169, 169, 169]), // DarkGrey
    Rgb([255, 255, 240]), // Ivory
    Rgb([152, 251, 152]), // PaleGreen
    Rgb([184, 134, 11]),  // DarkGoldenRod
    Rgb([255, 240, 245]), // LavenderBlush
    Rgb([112, 128, 144]), // SlateGrey
    Rgb([255, 20, 147]),  // DeepPink
    Rgb([255, 215, 0]),   // Gold
    Rgb([0, 255, 255]),   // Cyan
    Rgb([176, 196, 222]), // LightSteelBlue
    Rgb([147, 112, 219]), // MediumPurple
    Rgb([34, 139, 34]),   // ForestGreen
    Rgb([255, 140, 0]),   // DarkOrange
    Rgb([210, 180, 140]), // Tan
    Rgb([250, 128, 114]), // Salmon
    Rgb([238, 232, 170]), // PaleGoldenRod
    Rgb([144, 238, 144]), // LightGreen
    Rgb([119, 136, 153]), // LightSlateGray
    Rgb([240, 255, 240]), // HoneyDew
    Rgb([255, 0, 255]),   // Fuchsia
    Rgb([32, 178, 170]),  // LightSeaGreen
    Rgb([153, 50, 204]),  // DarkOrchid
    Rgb([0, 128, 0]),     // Green
    Rgb([127, 255, 0]),   // Chartreuse
    Rgb([50, 205, 50]),   // LimeGreen
    Rgb([250, 235, 215]), // AntiqueWhite
    Rgb([245, 245, 220]), // Beige
    Rgb([220, 220, 220]), // Gainsboro
    Rgb([255, 228, 196]), // Bisque
    Rgb([139, 69, 19]),   // SaddleBrown
    Rgb([192, 192, 192]), // Silver
    Rgb([230, 230, 250]), // Lavender
    Rgb([0, 128, 128]),   // Teal
    Rgb([224, 255, 255]), // LightCyan
    Rgb([255, 239, 213]), // PapayaWhip
    Rgb([128, 0, 128]),   // Purple
    Rgb([255, 127, 80]),  // Coral
    Rgb([222, 184, 135]), // BurlyWood
    Rgb([211, 211, 211]), // LightGray
    Rgb([255, 250, 250]), // Snow
    Rgb([255, 228, 225]), // MistyRose
    Rgb([176, 224, 230]), // PowderBlue
    Rgb([0, 139, 139]),   // DarkCyan
    Rgb([255, 255, 255]), // White
    Rgb([64, 224, 208]),  // Turquoise
    Rgb([123, 104, 238]), // MediumSlateBlue
    Rgb([255, 218, 185]), // PeachPuff
    Rgb([255, 228, 181]), // Moccasin
    Rgb([255, 160, 122]), // LightSalmon
    Rgb([135, 206, 235]), // SkyBlue
    Rgb([240, 230, 140]), // Khaki
    Rgb([0, 250, 154]),   // MediumSpringGreen
    Rgb([138, 43, 226]),  // BlueViolet
    Rgb([245, 255, 250]), // MintCream
    Rgb([250, 240, 230]), // Linen
    Rgb([46, 139, 87]),   // SeaGreen
    Rgb([255, 105, 180]), // HotPink
    Rgb([255, 255, 224]), // LightYellow
    Rgb([255, 235, 205]), // BlanchedAlmond
    Rgb([65, 105, 225]),  // RoyalBlue
    Rgb([188, 143, 143]), // RosyBrown
    Rgb([186, 85, 211]),  // MediumOrchid
    Rgb([0, 206, 209]),   // DarkTurquoise
    Rgb([250, 250, 210]), // LightGoldenRodYellow
    Rgb([135, 206, 250]), // LightSkyBlue
];

/// Returns the palette color for a class id.
///
/// The mapping is deterministic: `PALETTE[class % PALETTE_SIZE]`.
pub fn color_for_class(class: usize) -> Rgb<u8> {
    PALETTE[class % PALETTE.len()]
}
