//! Unit tests for drt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(42), Some(id));
        assert_eq!(EdgeId::from_index(usize::MAX), None);
    }

    #[test]
    fn unset_marker() {
        assert!(!NodeId::UNSET.is_set());
        assert!(NodeId(0).is_set());
        assert_eq!(EdgeId::UNSET.0, u32::MAX);
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(NodeId(7).to_string(), "n7");
        assert_eq!(EdgeId(3).to_string(), "e3");
    }
}

#[cfg(test)]
mod request {
    use crate::{NodeId, Request};

    #[test]
    fn display_is_compact() {
        let r = Request::new(3, 1.5, NodeId(0), NodeId(9));
        assert_eq!(r.to_string(), "#3 @ 1.5000: 0 -> 9");
    }
}

#[cfg(test)]
mod tag {
    use crate::TopologyTag;

    #[test]
    fn only_novolcomp_skips_volumes() {
        for tag in TopologyTag::ALL {
            assert_eq!(tag.computes_volumes(), tag != TopologyTag::NoVolComp, "{tag}");
        }
    }

    #[test]
    fn parse_roundtrip() {
        for tag in TopologyTag::ALL {
            assert_eq!(tag.as_str().parse::<TopologyTag>().unwrap(), tag);
        }
        assert_eq!(" trigrid ".parse::<TopologyTag>().unwrap(), TopologyTag::TriGrid);
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("hexgrid".parse::<TopologyTag>().is_err());
        assert!("Ring".parse::<TopologyTag>().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn streams_are_reproducible_and_distinct() {
        let a: u64 = SimRng::for_stream(1, 0).random();
        let b: u64 = SimRng::for_stream(1, 0).random();
        let c: u64 = SimRng::for_stream(1, 1).random();
        assert_eq!(a, b);
        assert_ne!(a, c, "adjacent streams should diverge");
    }

    #[test]
    fn stream_zero_is_master_seed() {
        let a: u64 = SimRng::for_stream(77, 0).random();
        let b: u64 = SimRng::new(77).random();
        assert_eq!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..10usize);
            assert!(v < 10);
        }
    }
}
