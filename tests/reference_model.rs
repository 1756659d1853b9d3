//! Lock-step comparison against a dense reference raster.
//!
//! A plain `Raster` is edited alongside the run-length encoding with the same
//! deterministic edit stream. After every edit the encoding must decode to the
//! reference, and its run count must equal the number of color changes in the
//! reference plus one, which is exactly what maximal compression means.

use rle_raster::{Color, Raster, RunLengthEncoding};

/// xorshift32: deterministic across platforms, no dependencies.
struct XorShift(u32);

impl XorShift {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next() % n
    }
}

/// Run count of a maximally compressed encoding of `raster`.
fn expected_run_count(raster: &Raster) -> usize {
    let pixels = raster.pixels();
    1 + pixels.windows(2).filter(|w| w[0] != w[1]).count()
}

fn palette(i: u32) -> Color {
    const COLORS: [Color; 4] = [
        Color::BLACK,
        Color::WHITE,
        Color::rgb(200, 0, 0),
        Color::rgb(200, 0, 1),
    ];
    COLORS[i as usize % COLORS.len()]
}

fn run_lockstep(width: u32, height: u32, seed: u32, edits: usize) {
    let mut rng = XorShift(seed);
    let mut reference = Raster::from_fn(width, height, |_, _| palette(rng.below(4))).unwrap();
    let mut rle = RunLengthEncoding::from_raster(&reference).unwrap();
    assert_eq!(rle.run_count(), expected_run_count(&reference));

    for step in 0..edits {
        let x = rng.below(width);
        let y = rng.below(height);
        let color = palette(rng.below(4));

        rle.set_pixel(x, y, color).unwrap();
        reference.set(x, y, color).unwrap();

        if let Err(violation) = rle.validate() {
            panic!("step {step}: set ({x}, {y}) broke the encoding: {violation}");
        }
        assert_eq!(
            rle.run_count(),
            expected_run_count(&reference),
            "step {step}: encoding not maximally compressed"
        );
        assert_eq!(rle.get_pixel(x, y).unwrap(), color, "step {step}");
    }
    assert_eq!(rle.to_raster(), reference);
}

#[test]
fn lockstep_small_square() {
    run_lockstep(4, 4, 0x1234_5678, 500);
}

#[test]
fn lockstep_single_row() {
    run_lockstep(17, 1, 0xdead_beef, 500);
}

#[test]
fn lockstep_single_column() {
    run_lockstep(1, 13, 0x0bad_f00d, 300);
}

#[test]
fn lockstep_wide_frame() {
    run_lockstep(40, 25, 0xc0ff_ee11, 2000);
}

#[test]
fn single_pixel_raster() {
    let mut rle = RunLengthEncoding::new(1, 1).unwrap();
    for i in 0..8 {
        rle.set_pixel(0, 0, palette(i)).unwrap();
        assert_eq!(rle.run_count(), 1);
        assert_eq!(rle.get_pixel(0, 0).unwrap(), palette(i));
        rle.validate().unwrap();
    }
}

#[test]
fn repaint_collapses_to_single_run() {
    let mut rng = XorShift(42);
    let raster = Raster::from_fn(9, 7, |_, _| palette(rng.below(4))).unwrap();
    let mut rle = RunLengthEncoding::from_raster(&raster).unwrap();

    for y in 0..7 {
        for x in 0..9 {
            rle.set_pixel(x, y, Color::WHITE).unwrap();
        }
    }
    assert_eq!(rle.run_count(), 1);
    assert_eq!(rle.to_raster(), Raster::filled(9, 7, Color::WHITE).unwrap());
}

#[test]
fn rgba_framebuffer_roundtrip() {
    let mut data = Vec::with_capacity(32 * 16 * 4);
    for y in 0..16u32 {
        for x in 0..32u32 {
            let (r, g, b) = if x < 16 {
                ((x * 16) as u8, 0, 0)
            } else if y < 8 {
                (0, 0, 200)
            } else if (x + y) % 2 == 0 {
                (255, 255, 255)
            } else {
                (0, 0, 0)
            };
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    let raster = Raster::from_rgba(&data, 32, 16).unwrap();
    let rle = RunLengthEncoding::from_raster(&raster).unwrap();
    rle.validate().unwrap();
    assert_eq!(rle.run_count(), expected_run_count(&raster));
    assert_eq!(&rle.to_raster().to_rgba32()[..], &data[..]);
}
