//! Test utilities for line protocol encoding

use crate::app::models::{CodewordStats, DownstreamChannel, Modulation, UpstreamChannel};


/// Downstream channel with every field populated
pub fn sample_downstream() -> DownstreamChannel {
    DownstreamChannel {
        id: 3,
        frequency: 591_000_000,
        snr: 37,
        modulation: Modulation::Qam256,
        power_level: -1,
        codewords: CodewordStats {
            unerrored: 2_864_551_713,
            correctable: 103,
            uncorrectable: 512,
        },
    }
}

/// Upstream channel as recorded after a failed ranging
pub fn sample_upstream() -> UpstreamChannel {
    UpstreamChannel {
        id: 3,
        frequency: 23_700_000,
        ranging_service_id: 0,
        symbol_rate: 4.815,
        power_level: 41,
        modulations: Vec::new(),
        ranging_ok: false,
    }
}

/// Sink that rejects every write
pub struct ClosedSink;

impl std::io::Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
