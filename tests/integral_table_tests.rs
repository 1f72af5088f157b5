//! Integration tests for integral table construction and rectangle queries
//!
//! These exercise the public API end to end: pixel sources, the three
//! constructors and the zero-padded rectangle query.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use surf_integral::utils::intensity::rgb_to_intensity;
use surf_integral::{IntegralTable, PixelSource, RgbBuffer, intensity};

/// Deterministic pseudo-random RGB image (LCG)
fn noise_image(width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..width * height * 3)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn test_full_image_sum_matches_total_intensity() {
    let (width, height) = (23, 17);
    let rgb = noise_image(width, height, 7);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();
    let table = IntegralTable::new(&source);

    let expected: f64 = rgb_to_intensity(&rgb, width, height)
        .iter()
        .map(|&v| v as f64)
        .sum();
    assert_relative_eq!(
        table.value_at(width - 1, height - 1) as f64,
        expected,
        max_relative = 1e-5
    );
    assert_eq!(table.total(), table.value_at(width - 1, height - 1));
}

#[test]
fn test_one_pixel_rectangle_equals_intensity() {
    let (width, height) = (12, 9);
    let rgb = noise_image(width, height, 42);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();
    let table = IntegralTable::new(&source);

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = source.pixel_at(x, y);
            assert_abs_diff_eq!(
                table.rectangle_sum(y as isize, x as isize, 1, 1),
                intensity(r, g, b),
                epsilon = 1e-4
            );
        }
    }
}

#[test]
fn test_all_white_cells_count_covered_pixels() {
    let (width, height) = (7, 5);
    let rgb = vec![255u8; width * height * 3];
    let source = RgbBuffer::new(&rgb, width, height).unwrap();
    let table = IntegralTable::new(&source);

    for y in 0..height {
        for x in 0..width {
            assert_eq!(table.value_at(x, y), ((x + 1) * (y + 1)) as f32);
        }
    }
}

#[test]
fn test_rectangle_sum_matches_brute_force() {
    let (width, height) = (10, 8);
    let rgb = noise_image(width, height, 3);
    let plane = rgb_to_intensity(&rgb, width, height);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();
    let table = IntegralTable::new(&source);

    for (row, col, rows, cols) in [(0, 0, 3, 5), (2, 4, 5, 2), (1, 7, 7, 3), (5, 0, 3, 10)] {
        let mut expected = 0f64;
        for y in row..row + rows {
            for x in col..col + cols {
                expected += plane[y * width + x] as f64;
            }
        }
        let sum = table.rectangle_sum(row as isize, col as isize, rows, cols);
        assert_abs_diff_eq!(sum as f64, expected, epsilon = 1e-3);
    }
}

#[test]
fn test_rectangle_outside_image_is_zero() {
    let rgb = noise_image(6, 6, 11);
    let source = RgbBuffer::new(&rgb, 6, 6).unwrap();
    let table = IntegralTable::new(&source);

    assert_eq!(table.rectangle_sum(10, 10, 3, 3), 0.0);
    assert_eq!(table.rectangle_sum(-10, -10, 3, 3), 0.0);
    assert_eq!(table.rectangle_sum(0, 20, 6, 6), 0.0);
}

#[test]
fn test_queries_are_never_negative() {
    let (width, height) = (16, 16);
    let rgb = noise_image(width, height, 99);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();
    let table = IntegralTable::new(&source);

    for row in -2..18isize {
        for col in -2..18isize {
            for size in [0usize, 1, 3, 8] {
                assert!(table.rectangle_sum(row, col, size, size) >= 0.0);
            }
        }
    }
}

#[test]
fn test_repeated_construction_is_bit_identical() {
    let (width, height) = (31, 19);
    let rgb = noise_image(width, height, 5);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();

    let first = IntegralTable::new(&source);
    let second = IntegralTable::new(&source);
    for y in 0..height {
        for x in 0..width {
            assert_eq!(first.value_at(x, y).to_bits(), second.value_at(x, y).to_bits());
        }
    }
}

#[test]
fn test_all_constructors_agree_bit_for_bit() {
    let (width, height) = (64, 37);
    let rgb = noise_image(width, height, 2024);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();

    let sequential = IntegralTable::new(&source);
    let parallel = IntegralTable::new_parallel(&source);
    let from_plane =
        IntegralTable::from_intensity(&rgb_to_intensity(&rgb, width, height), width, height)
            .unwrap();

    for y in 0..height {
        for x in 0..width {
            let bits = sequential.value_at(x, y).to_bits();
            assert_eq!(parallel.value_at(x, y).to_bits(), bits);
            assert_eq!(from_plane.value_at(x, y).to_bits(), bits);
        }
    }
}

#[test]
fn test_image_crate_source_matches_raw_buffer() {
    let (width, height) = (9, 4);
    let rgb = noise_image(width, height, 17);
    let img = image::RgbImage::from_raw(width as u32, height as u32, rgb.clone()).unwrap();
    let source = RgbBuffer::new(&rgb, width, height).unwrap();

    assert_eq!(IntegralTable::new(&img), IntegralTable::new(&source));
}

#[test]
fn test_parallel_handles_empty_image() {
    let source = RgbBuffer::new(&[], 5, 0).unwrap();
    let table = IntegralTable::new_parallel(&source);
    assert!(table.is_empty());
    assert_eq!(table.width(), 5);
    assert_eq!(table.height(), 0);
}

#[test]
fn test_concurrent_readers() {
    let (width, height) = (40, 30);
    let rgb = noise_image(width, height, 8);
    let source = RgbBuffer::new(&rgb, width, height).unwrap();
    let table = IntegralTable::new(&source);
    let expected = table.rectangle_sum(5, 5, 10, 10);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(table.rectangle_sum(5, 5, 10, 10), expected);
                }
            });
        }
    });
}
