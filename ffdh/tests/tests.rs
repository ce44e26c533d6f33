#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use ffdh::io;
    use ffdh::io::layout_to_svg::layout_to_svg;
    use ffdh::io::svg_util::SvgDrawOptions;
    use ffdh::units;
    use ffdh::units::UnitSystem;
    use shelfpack::io::import;
    use shelfpack::pack::ShelfPacker;
    use shelfpack::util::assertions;

    #[test_case("../assets/wardrobe.json", UnitSystem::Metric; "wardrobe")]
    #[test_case("../assets/garage_cabinets.json", UnitSystem::Metric; "garage cabinets")]
    #[test_case("../assets/plywood_imperial.json", UnitSystem::Imperial; "plywood imperial")]
    fn end_to_end(instance_path: &str, units: UnitSystem) {
        let ext_instance = io::read_json_instance(Path::new(instance_path)).unwrap();
        let ext_instance = units::instance_to_internal(ext_instance, units);
        let instance = import(&ext_instance).unwrap();

        let result = ShelfPacker::new(instance.clone()).solve();

        assert!(result.summary.sheets_needed > 0);
        assert!(assertions::all_instances_accounted_for(&instance, &result));
        assert!(assertions::summary_is_consistent(&result, instance.stock));

        // everything was placed, so the used area is exactly the requested area
        let requested_area: f32 = instance
            .requests
            .iter()
            .map(|r| r.area() * r.quantity as f32)
            .sum();
        if result.unplaced.is_empty() {
            assert!((result.summary.total_area_used - requested_area).abs() < 1.0);
        }
        for layout in &result.layouts {
            assert!(assertions::no_placed_parts_overlap(layout));
            assert!(assertions::placed_parts_within_stock(layout, instance.stock));
            assert!(assertions::waste_is_disjoint(layout, instance.stock));

            let svg = layout_to_svg(layout, instance.stock, SvgDrawOptions::default());
            assert!(svg.to_string().contains("placed_parts"));
        }
    }

    #[test]
    fn oversized_parts_are_reported_not_fatal() {
        let ext_instance =
            io::read_json_instance(Path::new("../assets/awkward_panels.json")).unwrap();
        let instance = import(&ext_instance).unwrap();

        let result = ShelfPacker::new(instance.clone()).solve();

        // the 2600x1300 panel fits no sheet; everything else still gets packed
        assert_eq!(result.unplaced.len(), 1);
        assert!(result.summary.sheets_needed > 0);
        assert!(assertions::all_instances_accounted_for(&instance, &result));
    }

    #[test]
    fn imperial_lengths_convert_through_the_boundary() {
        assert_eq!(UnitSystem::Imperial.to_internal(48.0), 1219.2);
        assert_eq!(UnitSystem::Metric.to_internal(1220.0), 1220.0);

        let v = UnitSystem::Imperial.from_internal(UnitSystem::Imperial.to_internal(96.0));
        assert!((v - 96.0).abs() < 1e-4);

        // 1 ft² == 92,903.04 mm²
        assert!((UnitSystem::Imperial.area_from_internal(92_903.04) - 1.0).abs() < 1e-5);
        assert_eq!(UnitSystem::Imperial.area_unit(), "ft²");
        assert_eq!(UnitSystem::Metric.area_unit(), "mm²");
    }

    #[test]
    fn instance_conversion_touches_every_length() {
        let ext_instance =
            io::read_json_instance(Path::new("../assets/plywood_imperial.json")).unwrap();
        let converted = units::instance_to_internal(ext_instance.clone(), UnitSystem::Imperial);

        assert_eq!(converted.sheet.width, ext_instance.sheet.width * 25.4);
        assert_eq!(converted.kerf, ext_instance.kerf * 25.4);
        for (converted_part, part) in converted.parts.iter().zip(ext_instance.parts.iter()) {
            assert_eq!(converted_part.width, part.width * 25.4);
            assert_eq!(converted_part.height, part.height * 25.4);
            assert_eq!(converted_part.quantity, part.quantity);
        }
    }
}
