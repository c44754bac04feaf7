use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{EntrySource, PromptSource, RandomSource};

/// Returns a normalized label for a source spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create an input source from a CLI-style spec.
/// Supported specs:
/// - prompt
/// - random[:seed]
pub fn create_source_from_spec(
    spec: &str,
    seed: u64,
) -> Result<Box<dyn EntrySource>, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "prompt" => Ok(Box::new(PromptSource::stdio().with_state(false))),
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.trim().parse::<u64>().ok())
                .unwrap_or(seed);
            Ok(Box::new(RandomSource::new(StdRng::seed_from_u64(custom_seed))))
        }
        _ => Err(format!("unrecognized input spec: {spec}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_strip_arguments() {
        assert_eq!(label_for_spec("Random:42"), "random");
        assert_eq!(label_for_spec(" prompt "), "prompt");
    }

    #[test]
    fn unknown_spec_is_an_error() {
        assert!(create_source_from_spec("heuristic", 1).is_err());
        assert!(create_source_from_spec("random:9", 1).is_ok());
    }
}
