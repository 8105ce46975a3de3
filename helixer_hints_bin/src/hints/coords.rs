use crate::gff::GffStrand;
use crate::hints::divvy::PreHint;
use crate::results::{Error, Result};

/*
    Internal coordinates are 0-based and half-open, chained as
    pre-hint rel. to sub-region + sub-region rel. to chunk + chunk rel. to sequence.

    Plus strand rows run with the genome, so the offsets are added to the chunk start.

    Minus strand rows run against the genome and the chunk start is the exclusive upper
    bound, so the offsets are subtracted. The pre-hint end then gives the lower genomic
    bound and the pre-hint start the upper one, i.e. the pair swaps. The +1 for 1-based
    closed output goes on whichever value ends up as the start.
 */

/// Returns 1-based, fully closed `(start, end, strand)` with `start <= end`
pub fn resolve_coordinates(
    is_plus_strand: bool,
    chunk_start: u64,
    region_start: usize,
    pre_hint: &PreHint,
) -> Result<(u64, u64, GffStrand)> {
    let rel_start = (region_start + pre_hint.get_start()) as u64;
    let rel_end = (region_start + pre_hint.get_end()) as u64;

    if is_plus_strand {
        let absolute_start = chunk_start + rel_start;
        let absolute_end = chunk_start + rel_end;

        Ok((absolute_start + 1, absolute_end, GffStrand::Forward))
    } else {
        let (absolute_upper, absolute_lower) =
            match (chunk_start.checked_sub(rel_start), chunk_start.checked_sub(rel_end)) {
                (Some(upper), Some(lower)) => (upper, lower),
                _ => {
                    return Err(Error::InvalidValue(format!(
                        "Minus strand offsets {}..{} run past chunk start {}",
                        rel_start, rel_end, chunk_start
                    )))
                }
            };

        Ok((absolute_lower + 1, absolute_upper, GffStrand::Reverse))
    }
}

#[cfg(test)]
mod tests {
    use crate::gff::GffStrand;
    use crate::hints::config::HintCategory;
    use crate::hints::coords::resolve_coordinates;
    use crate::hints::divvy::PreHint;

    fn pre_hint(start: usize, end: usize) -> PreHint {
        PreHint::new(HintCategory::Coding, start, end, 0.9)
    }

    #[test]
    fn test_forward()
    {
        let coords = resolve_coordinates(true, 1000, 5, &pre_hint(2, 8)).unwrap();
        assert_eq!(coords, (1008, 1013, GffStrand::Forward));
    }

    #[test]
    fn test_forward_from_sequence_start()
    {
        let coords = resolve_coordinates(true, 0, 0, &pre_hint(0, 1)).unwrap();
        assert_eq!(coords, (1, 1, GffStrand::Forward));
    }

    #[test]
    fn test_reverse()
    {
        // Rows 7..13 of a chunk starting at 1000 are 0-based positions 992 down to 987
        let coords = resolve_coordinates(false, 1000, 5, &pre_hint(2, 8)).unwrap();
        assert_eq!(coords, (988, 993, GffStrand::Reverse));
    }

    #[test]
    fn test_reverse_to_sequence_start()
    {
        let coords = resolve_coordinates(false, 10, 2, &pre_hint(3, 8)).unwrap();
        assert_eq!(coords, (1, 5, GffStrand::Reverse));
    }

    #[test]
    fn test_reverse_underflow()
    {
        assert!(resolve_coordinates(false, 10, 5, &pre_hint(2, 8)).is_err());
    }
}
