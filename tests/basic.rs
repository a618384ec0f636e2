use midly::{MidiMessage, Smf, TrackEventKind};
use pictone::grid::PixelGrid;
use pictone::pipeline::{image_to_midi, image_to_wave, MidiOptions, WaveOptions};
use pictone::scan::scan_notes;

fn count_note_ons(smf: &Smf) -> usize {
    smf.tracks
        .iter()
        .flatten()
        .filter(|e| {
            matches!(
                e.kind,
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOn { .. },
                    ..
                }
            )
        })
        .count()
}

#[test]
fn identical_pixels_make_one_sustained_event() {
    let grid = PixelGrid::from_pixels(2, 1, vec![[255, 0, 0]; 2]).unwrap();
    let table = scan_notes(&grid, false);
    assert_eq!(table.len(), 1);
    let event = table.events()[0];
    assert_eq!(event.duration, 2);
    assert_eq!(event.note, 21);
    assert_eq!(event.velocity, 127);
    assert_eq!(event.channel, 0);
}

#[test]
fn distinct_hues_make_two_unit_events() {
    // Red maps to note 21, blue to note 79.
    let grid = PixelGrid::from_pixels(2, 1, vec![[255, 0, 0], [0, 0, 255]]).unwrap();
    let table = scan_notes(&grid, false);
    assert_eq!(table.len(), 2);
    for event in table.events() {
        assert_eq!(event.duration, 1);
    }
    assert_ne!(table.events()[0].note, table.events()[1].note);
}

#[test]
fn midi_pipeline_end_to_end() {
    let dir = std::env::temp_dir();
    let input = dir.join("pictone_basic_in.png");
    let output = dir.join("pictone_basic_out.mid");

    let mut img = image::RgbImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
    img.put_pixel(1, 0, image::Rgb([255, 0, 0]));
    img.save(&input).unwrap();

    image_to_midi(&input, &output, &MidiOptions::default()).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    let smf = Smf::parse(&bytes).unwrap();
    assert_eq!(smf.tracks.len(), 16);
    assert_eq!(count_note_ons(&smf), 1);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn wave_pipeline_end_to_end() {
    let dir = std::env::temp_dir();
    let input = dir.join("pictone_basic_wave_in.png");
    let output = dir.join("pictone_basic_wave_out.wav");

    let mut img = image::RgbImage::new(3, 2);
    for (_, _, p) in img.enumerate_pixels_mut() {
        *p = image::Rgb([10, 200, 80]);
    }
    img.save(&input).unwrap();

    let options = WaveOptions {
        samples_per_row: 512,
        ..WaveOptions::default()
    };
    image_to_wave(&input, &output, &options).unwrap();

    let mut reader = hound::WavReader::open(&output).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    // One 512-sample segment per image column.
    assert_eq!(reader.samples::<i16>().count(), 3 * 512);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn per_pixel_mode_emits_one_burst_per_pixel() {
    let dir = std::env::temp_dir();
    let input = dir.join("pictone_basic_pp_in.png");
    let output = dir.join("pictone_basic_pp_out.wav");

    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([120, 30, 220]));
    img.save(&input).unwrap();

    let options = WaveOptions {
        per_pixel: true,
        ..WaveOptions::default()
    };
    image_to_wave(&input, &output, &options).unwrap();

    let mut reader = hound::WavReader::open(&output).unwrap();
    assert_eq!(reader.samples::<i16>().count(), 4 * 256);

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}
