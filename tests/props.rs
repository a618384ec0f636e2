use pictone::color::rgb_to_hsv;
use pictone::grid::PixelGrid;
use pictone::map::{
    hue_to_note, note_params, saturation_to_velocity, value_to_channel, Voice,
};
use pictone::scan::scan_notes;
use pictone::synth;
use proptest::prelude::*;

proptest! {
    #[test]
    fn hsv_ranges_hold_for_all_rgb(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hsv = rgb_to_hsv(r, g, b);
        prop_assert!(hsv.h < 360);
        prop_assert!(hsv.s <= 100);
        prop_assert!(hsv.v <= 100);
    }

    #[test]
    fn mapper_ranges_hold_for_all_hsv(h in 0u16..360, s in 0u8..=100, v in 0u8..=100) {
        let note = hue_to_note(h);
        prop_assert!((21..=108).contains(&note));

        let velocity = saturation_to_velocity(s);
        prop_assert!(velocity <= 127);

        let channel = value_to_channel(v);
        prop_assert!(channel <= 14);
    }

    #[test]
    fn background_channel_iff_velocity_at_most_5(h in 0u16..360, s in 0u8..=100, v in 0u8..=100) {
        let params = note_params(pictone::color::Hsv { h, s, v }, false).unwrap();
        let background = params.velocity <= 5;
        prop_assert_eq!(params.channel == 15, background);
    }

    #[test]
    fn uniform_row_coalesces_to_one_event(
        n in 1usize..40,
        pixel in (0u8..=255, 0u8..=255, 0u8..=255),
    ) {
        let (r, g, b) = pixel;
        let grid = PixelGrid::from_pixels(n, 1, vec![[r, g, b]; n]).unwrap();
        let table = scan_notes(&grid, false);
        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table.events()[0].duration, n as u32);
        prop_assert_eq!(table.events()[0].start, 0);
    }

    #[test]
    fn additive_output_length_matches(n in 0usize..2048, f in 20.0f64..8000.0) {
        let voices = [Voice { frequency: f, amplitude: 0.5 }];
        prop_assert_eq!(synth::additive(&voices, n, 0.0).len(), n);
    }

    #[test]
    fn quantize_truncates_toward_zero(x in -1.0f64..1.0) {
        let q = synth::quantize(x, synth::ROW_GAIN) as f64;
        let scaled = x * synth::ROW_GAIN;
        prop_assert_eq!(q, scaled.trunc());
    }
}
