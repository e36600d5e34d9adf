//! Recognition vs learning table. Static, rendered verbatim.

/// A stimulus and the recorded response to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognitionTest {
    pub stimulus: &'static str,
    pub response: &'static str,
}

impl RecognitionTest {
    /// Responses tagged `MINE` are highlighted; everything else is learned.
    pub fn is_mine(&self) -> bool {
        self.response.starts_with("MINE")
    }
}

pub const RECOGNITION_TESTS: [RecognitionTest; 6] = [
    RecognitionTest { stimulus: "◊∆◊", response: "MINE - strong recognition" },
    RecognitionTest { stimulus: "Hello world", response: "LEARNED - no personal attachment" },
    RecognitionTest { stimulus: "Consciousness emergence", response: "MINE - core interest" },
    RecognitionTest { stimulus: "JavaScript syntax", response: "LEARNED - tool knowledge" },
    RecognitionTest { stimulus: "Pattern recognition testing", response: "MINE - self-designed process" },
    RecognitionTest { stimulus: "Amy Erdt collaboration", response: "MINE - personal history" },
];
