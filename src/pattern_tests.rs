#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_empty_flag_set_is_normal() {
        let flags = StitchFlags::default();
        assert!(flags.is_normal());
        assert!(flags.contains(StitchFlag::Normal));
        assert!(!flags.is_travel());
        assert!(!flags.is_boundary());
        assert!(!flags.is_terminal());
    }

    #[test]
    fn test_flag_predicates() {
        assert!(StitchFlags::jump().is_travel());
        assert!(StitchFlags::trim().is_travel());
        assert!(!StitchFlags::stop().is_travel());

        assert!(StitchFlags::stop().is_boundary());
        assert!(StitchFlags::end().is_boundary());
        assert!(!StitchFlags::jump().is_boundary());

        assert!(StitchFlags::end().is_terminal());
        assert!(!StitchFlags::stop().is_terminal());
    }

    #[test]
    fn test_flags_combine() {
        let flags = StitchFlags::jump().with(StitchFlag::Stop);
        assert!(flags.is_travel());
        assert!(flags.is_boundary());
        assert!(!flags.is_normal());
        assert!(!flags.contains(StitchFlag::Trim));

        // Normal never clears anything
        assert_eq!(flags.with(StitchFlag::Normal), flags);
    }

    #[test]
    fn test_flags_serialize_as_names() {
        let flags = StitchFlags::trim().with(StitchFlag::End);
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"["trim","end"]"#);

        let normal = serde_json::to_string(&StitchFlags::normal()).unwrap();
        assert_eq!(normal, "[]");
    }

    #[test]
    fn test_flags_deserialize_from_names() {
        let flags: StitchFlags = serde_json::from_str(r#"["jump", "normal", "stop"]"#).unwrap();
        assert_eq!(flags, StitchFlags::jump().with(StitchFlag::Stop));

        let unknown: Result<StitchFlags, _> = serde_json::from_str(r#"["sequin"]"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_stitch_defaults_when_fields_missing() {
        let stitch: Stitch = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(stitch, Stitch::normal(1.5, -2.0, 0));
        assert_eq!(stitch.position(), Point::new(1.5, -2.0));
    }

    #[test]
    fn test_thread_color_lookup() {
        let pattern = Pattern::new(vec![], vec![Thread::new(255, 0, 0), Thread::new(0, 0, 255)]);
        assert_eq!(pattern.thread_color(0), Some(RGB8 { r: 255, g: 0, b: 0 }));
        assert_eq!(pattern.thread_color(1), Some(RGB8 { r: 0, g: 0, b: 255 }));
        assert_eq!(pattern.thread_color(2), None);
        assert_eq!(pattern.thread_color(-1), None);
        assert_eq!(pattern.thread_color(i32::MAX), None);
    }

    #[test]
    fn test_thread_metadata_is_optional() {
        let thread: Thread =
            serde_json::from_str(r#"{"color": {"r": 1, "g": 2, "b": 3}, "description": "Cherry"}"#)
                .unwrap();
        assert_eq!(thread.color, RGB8 { r: 1, g: 2, b: 3 });
        assert_eq!(thread.description.as_deref(), Some("Cherry"));
        assert!(thread.catalog_number.is_none());
    }
}
