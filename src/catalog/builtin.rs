//! The shipped AI vocabulary.

/// (term, definition) pairs in display order.
pub(super) const AI_TERMS: [(&str, &str); 5] = [
    (
        "Artificial Intelligence",
        "Simulating human intelligence in machines.",
    ),
    ("Machine Learning", "Training machines to learn from data."),
    (
        "Neural Network",
        "A series of algorithms mimicking the human brain.",
    ),
    (
        "Augmented Reality",
        "Overlaying virtual content in the real world.",
    ),
    ("Big Data", "Large datasets analyzed computationally."),
];
