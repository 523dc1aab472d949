/// 4x4 map without holes, start and goal in opposite corners.
pub const OPEN_4X4_MAP: &[&str] = &["SFFF", "FFFF", "FFFF", "FFFG"];

/// 3x3 ring around a single hole.
pub const HOLE_IN_THE_MIDDLE_MAP: &[&str] = &["SFF", "FHF", "FFG"];

/// The five cells around the start are cut off from the rest of the map.
pub const WALLED_OFF_GOAL_MAP: &[&str] = &["SFFH", "FFHF", "HHFF", "FFFG"];

/// The plan with the fewest moves (8) climbs over the wall in column 1 and
/// costs 62 when vertical moves cost 10. The cheapest plan takes 12 moves
/// around the right hand side for a cost of 48.
pub const DETOUR_MAP: &[&str] = &[
    "FFFFFF", //
    "FHFHHH", //
    "FHGFFF", //
    "FHHHHF", //
    "SHHFFF", //
    "FFFFHH",
];

pub const DETOUR_MAP_ANISOTROPIC_COST: f64 = 48.;
