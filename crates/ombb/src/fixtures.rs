//! Reference point sets with known hulls and boxes.
//!
//! - `pixel_points`: a 23-point outline in pixel-like units, scaled by 1.5 and
//!   shifted by (−250, −1050).
//! - `lonlat_points`: a 49-point building-sized outline in degrees (the first
//!   point is repeated at the end), meant to go through `SphericalMercator`.

use crate::point::Point;

const PIXEL_RAW: [[f64; 2]; 23] = [
    [235.0, 774.0],
    [245.0, 740.0],
    [230.0, 710.0],
    [240.0, 703.0],
    [274.0, 733.0],
    [306.0, 710.0],
    [272.0, 690.0],
    [277.0, 639.0],
    [305.0, 645.0],
    [347.0, 611.0],
    [340.0, 639.0],
    [298.0, 674.0],
    [325.0, 702.0],
    [335.0, 663.0],
    [355.0, 645.0],
    [350.0, 686.0],
    [400.0, 710.0],
    [360.0, 725.0],
    [357.0, 755.0],
    [328.0, 723.0],
    [291.0, 741.0],
    [289.0, 754.0],
    [266.0, 757.0],
];

pub const PIXEL_SCALE: f64 = 1.5;
pub const PIXEL_SHIFT: [f64; 2] = [-250.0, -1050.0];

/// Expected hull of `pixel_points` (counter-clockwise).
pub const PIXEL_HULL: [[f64; 2]; 6] = [
    [165.5, -91.5],
    [270.5, -133.5],
    [350.0, 15.0],
    [285.5, 82.5],
    [102.5, 111.0],
    [95.0, 15.0],
];

/// Expected minimum-area box of `pixel_points` (UL, BL, BR, UR).
pub const PIXEL_BOX: [[f64; 2]; 4] = [
    [41.36206896551724, -41.84482758620689],
    [287.82758620689657, -140.4310344827586],
    [364.37931034482756, 50.94827586206896],
    [117.91379310344828, 149.5344827586207],
];

const LONLAT_RAW: [[f64; 2]; 49] = [
    [114.26671390000001, 30.599383600000003],
    [114.2668615, 30.599415800000003],
    [114.2670039, 30.599465600000002],
    [114.26715410000001, 30.599522],
    [114.26728890000001, 30.5995807],
    [114.2674544, 30.599659300000003],
    [114.2676225, 30.599737800000003],
    [114.2677881, 30.599833],
    [114.26793830000001, 30.599927],
    [114.26796370000001, 30.599949300000002],
    [114.2679679, 30.5999763],
    [114.26796030000001, 30.6000012],
    [114.2679392, 30.6000149],
    [114.26791100000001, 30.6000225],
    [114.26788710000001, 30.600023600000004],
    [114.26785090000001, 30.600088000000003],
    [114.2678795, 30.6001009],
    [114.26785190000001, 30.6001501],
    [114.26782480000001, 30.6001395],
    [114.2677749, 30.600238100000002],
    [114.26705270000001, 30.600096200000003],
    [114.26706820000001, 30.600001400000004],
    [114.2671476, 30.599873700000003],
    [114.2671262, 30.5998631],
    [114.2671706, 30.599784500000002],
    [114.267088, 30.5997406],
    [114.2670116, 30.599696700000003],
    [114.26693920000001, 30.5997975],
    [114.2669137, 30.599772400000003],
    [114.2668821, 30.599753600000003],
    [114.2668529, 30.599738900000002],
    [114.26681520000001, 30.599723200000003],
    [114.2667763, 30.599713800000004],
    [114.2667375, 30.599710700000003],
    [114.26669980000001, 30.599710700000003],
    [114.2666597, 30.599714900000002],
    [114.26662320000001, 30.599724300000002],
    [114.26659040000001, 30.5997379],
    [114.26662470000001, 30.599676600000002],
    [114.26660480000001, 30.599668500000003],
    [114.26664950000001, 30.5995893],
    [114.26666990000001, 30.599595700000002],
    [114.2667155, 30.5995166],
    [114.26665700000001, 30.5994761],
    [114.26663330000001, 30.599446500000003],
    [114.26662820000001, 30.599412200000003],
    [114.26664550000001, 30.599387600000004],
    [114.2666743, 30.599377500000003],
    [114.26671390000001, 30.599383600000003],
];

/// Expected lon/lat box of `lonlat_points` through `SphericalMercator`.
pub const LONLAT_BOX: [[f64; 2]; 4] = [
    [114.26639138410215, 30.599784771864584],
    [114.26669797832271, 30.599302420611224],
    [114.26801133406653, 30.599920910685253],
    [114.26770473984595, 30.600403258859338],
];

#[inline]
pub fn to_points(raw: &[[f64; 2]]) -> Vec<Point> {
    raw.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

/// The 23-point outline before scaling and shifting.
pub fn pixel_points_raw() -> Vec<Point> {
    to_points(&PIXEL_RAW)
}

/// The 23-point outline, scaled by `PIXEL_SCALE` and shifted by `PIXEL_SHIFT`.
pub fn pixel_points() -> Vec<Point> {
    let shift = Point::new(PIXEL_SHIFT[0], PIXEL_SHIFT[1]);
    pixel_points_raw()
        .into_iter()
        .map(|p| p * PIXEL_SCALE + shift)
        .collect()
}

pub fn lonlat_points() -> Vec<Point> {
    to_points(&LONLAT_RAW)
}
