use image::{Rgb, RgbImage};
use redzone_vision::HandSegmenter;

const SKIN: Rgb<u8> = Rgb([200, 120, 80]);
const BACKGROUND: Rgb<u8> = Rgb([20, 20, 20]);

fn frame_with_block(width: u32, height: u32, x0: u32, y0: u32, side: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for y in y0..(y0 + side).min(height) {
        for x in x0..(x0 + side).min(width) {
            img.put_pixel(x, y, SKIN);
        }
    }
    img
}

#[test]
fn test_blank_frame_has_no_hull() {
    let img = RgbImage::from_pixel(320, 240, BACKGROUND);
    assert!(HandSegmenter::default().segment(&img).is_none());
}

#[test]
fn test_large_skin_block_yields_hull() {
    let img = frame_with_block(320, 240, 100, 60, 100);
    let hull = HandSegmenter::default().segment(&img).expect("hull");

    assert!(hull.points.len() >= 3);

    // Morphology and blur may shift the outline by a few pixels; every hull
    // point must still sit near the painted block.
    const MARGIN: i32 = 12;
    for p in &hull.points {
        assert!(
            p.x >= 100 - MARGIN && p.x <= 200 + MARGIN,
            "hull x {} outside block",
            p.x
        );
        assert!(
            p.y >= 60 - MARGIN && p.y <= 160 + MARGIN,
            "hull y {} outside block",
            p.y
        );
    }

    // And the hull must span most of the block, not a sliver of it
    let min_x = hull.points.iter().map(|p| p.x).min().unwrap();
    let max_x = hull.points.iter().map(|p| p.x).max().unwrap();
    let min_y = hull.points.iter().map(|p| p.y).min().unwrap();
    let max_y = hull.points.iter().map(|p| p.y).max().unwrap();
    assert!(max_x - min_x >= 100 - MARGIN);
    assert!(max_y - min_y >= 100 - MARGIN);
}

#[test]
fn test_small_blob_rejected_by_area_filter() {
    let img = frame_with_block(320, 240, 150, 110, 20);
    assert!(HandSegmenter::default().segment(&img).is_none());
}

#[test]
fn test_largest_region_wins() {
    let mut img = frame_with_block(640, 240, 40, 60, 120);
    // A second, smaller skin patch far to the right
    for y in 80..130 {
        for x in 500..550 {
            img.put_pixel(x, y, SKIN);
        }
    }

    let hull = HandSegmenter::default().segment(&img).expect("hull");
    // All hull points belong to the big block on the left
    assert!(hull.points.iter().all(|p| p.x < 300));
}

#[test]
fn test_lowered_min_area_accepts_small_blob() {
    let img = frame_with_block(320, 240, 150, 110, 20);
    let segmenter = HandSegmenter::default().with_min_area(50.0);
    assert!(segmenter.segment(&img).is_some());
}
