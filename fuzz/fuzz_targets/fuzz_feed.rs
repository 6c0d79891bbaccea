#![no_main]

use libfuzzer_sys::fuzz_target;
use vedirect_rs::vedirect::{FrameDecoder, ManualClock};
use vedirect_rs::DecoderConfig;

fuzz_target!(|data: &[u8]| {
    // The first byte picks a gap pattern so stall resets get exercised too.
    let Some((&gap, bytes)) = data.split_first() else {
        return;
    };
    let clock = ManualClock::new();
    let mut decoder = FrameDecoder::with_clock(DecoderConfig { throttle_ms: 0 }, clock.clone());

    for (i, &b) in bytes.iter().enumerate() {
        if gap != 0 && i % gap as usize == 0 {
            clock.advance_ms(250);
        }
        decoder.feed(b);
    }

    // A clean frame must always decode afterwards.
    clock.advance_ms(250);
    decoder.feed_slice(b"\r\nV\t12800\r\nChecksum\tx");
    assert_eq!(
        decoder.current_snapshot().and_then(|s| s.battery_voltage_mv),
        Some(12800)
    );
});
