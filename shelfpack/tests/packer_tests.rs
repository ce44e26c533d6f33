#[cfg(test)]
mod tests {
    use test_case::test_case;

    use shelfpack::entities::{CutInstance, PartRequest, Shelf, StockSheet};
    use shelfpack::io::ext_repr::ExtCutInstance;
    use shelfpack::pack::{ShelfPacker, compute_waste, expand_and_order};
    use shelfpack::util::assertions;

    fn instance(
        sheet_w: f32,
        sheet_h: f32,
        kerf: f32,
        parts: &[(f32, f32, usize)],
    ) -> CutInstance {
        let requests = parts
            .iter()
            .enumerate()
            .map(|(id, &(w, h, q))| PartRequest::new(id, w, h, q))
            .collect();
        CutInstance::try_new(
            StockSheet {
                width: sheet_w,
                height: sheet_h,
            },
            kerf,
            requests,
        )
        .unwrap()
    }

    #[test]
    fn four_identical_parts_fill_two_shelves_on_one_sheet() {
        // 600x4 + margins exceeds 1220, so two parts per shelf across two shelves
        let instance = instance(1220.0, 2440.0, 3.0, &[(600.0, 400.0, 4)]);
        let result = ShelfPacker::new(instance).solve();

        assert_eq!(result.summary.sheets_needed, 1);
        assert!(result.unplaced.is_empty());
        let layout = &result.layouts[0];
        assert_eq!(layout.placed_parts.len(), 4);
        assert_eq!(layout.shelves.len(), 2);

        assert_eq!(layout.used_area(), 4.0 * 600.0 * 400.0);
        let positions: Vec<(f32, f32)> =
            layout.placed_parts.iter().map(|pp| (pp.x, pp.y)).collect();
        assert_eq!(
            positions,
            vec![(3.0, 3.0), (606.0, 3.0), (3.0, 406.0), (606.0, 406.0)]
        );
        assert!(layout.placed_parts.iter().all(|pp| !pp.rotated));
    }

    #[test]
    fn oversized_part_is_rejected_without_allocating_a_sheet() {
        let instance = instance(1220.0, 2440.0, 3.0, &[(5000.0, 5000.0, 1)]);
        let result = ShelfPacker::new(instance).solve();

        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.unplaced[0].area(), 25_000_000.0);
        assert!(result.layouts.is_empty());
        assert_eq!(result.summary.sheets_needed, 0);
        assert_eq!(result.summary.waste_percent, 0.0);
    }

    #[test]
    fn rejection_leaves_the_empty_sheet_open_for_later_parts() {
        // the oversized part is processed first (tallest) and must not burn a sheet slot
        let instance = instance(1220.0, 2440.0, 3.0, &[(5000.0, 5000.0, 1), (100.0, 100.0, 1)]);
        let result = ShelfPacker::new(instance).solve();

        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.summary.sheets_needed, 1);
        assert_eq!(result.layouts[0].id, 0);
        assert_eq!(result.layouts[0].placed_parts.len(), 1);
    }

    #[test]
    fn zero_kerf_packs_edge_to_edge() {
        let instance = instance(100.0, 100.0, 0.0, &[(50.0, 50.0, 4)]);
        let result = ShelfPacker::new(instance.clone()).solve();

        assert_eq!(result.summary.sheets_needed, 1);
        let layout = &result.layouts[0];
        assert_eq!(layout.placed_parts.len(), 4);
        assert_eq!(layout.shelves.len(), 2);
        assert!(layout.waste.is_empty());
        assert!(result.summary.total_waste_area.abs() < 1e-3);
        assert!(assertions::no_placed_parts_overlap(layout));
        assert!(assertions::placed_parts_within_stock(layout, instance.stock));
    }

    #[test]
    fn distinct_parts_share_a_single_shelf() {
        let instance = instance(
            1220.0,
            2440.0,
            3.0,
            &[(300.0, 200.0, 1), (200.0, 180.0, 1), (150.0, 150.0, 1)],
        );
        let result = ShelfPacker::new(instance).solve();

        assert_eq!(result.summary.sheets_needed, 1);
        let layout = &result.layouts[0];
        assert_eq!(layout.shelves.len(), 1);
        assert_eq!(layout.placed_parts.len(), 3);
        // FFDH order: tallest first, shelf height fixed by the first part
        assert_eq!(layout.shelves[0].height, 200.0);
        let xs: Vec<f32> = layout.placed_parts.iter().map(|pp| pp.x).collect();
        assert_eq!(xs, vec![3.0, 306.0, 509.0]);
    }

    #[test]
    fn rotation_is_tried_after_the_unrotated_orientation() {
        let instance = instance(100.0, 100.0, 0.0, &[(30.0, 80.0, 1), (80.0, 25.0, 1)]);
        let result = ShelfPacker::new(instance).solve();

        assert_eq!(result.summary.sheets_needed, 1);
        let layout = &result.layouts[0];
        assert_eq!(layout.shelves.len(), 1);
        let second = &layout.placed_parts[1];
        assert!(second.rotated);
        assert_eq!((second.width, second.height), (25.0, 80.0));
        assert_eq!((second.x, second.y), (30.0, 0.0));
    }

    #[test]
    fn parts_too_wide_to_share_spill_onto_new_sheets() {
        let instance = instance(100.0, 100.0, 0.0, &[(60.0, 60.0, 4)]);
        let result = ShelfPacker::new(instance.clone()).solve();

        assert_eq!(result.summary.sheets_needed, 4);
        for (i, layout) in result.layouts.iter().enumerate() {
            assert_eq!(layout.id, i);
            assert_eq!(layout.placed_parts.len(), 1);
            // trailing shelf gap + full-width bottom strip
            assert_eq!(layout.waste.len(), 2);
            assert_eq!(layout.waste[0].width(), 40.0);
            assert_eq!(layout.waste[0].height(), 60.0);
            assert_eq!(layout.waste[1].width(), 100.0);
            assert_eq!(layout.waste[1].height(), 40.0);
            let waste_area: f32 = layout.waste.iter().map(|w| w.area()).sum();
            assert_eq!(waste_area, 6400.0);
        }
        assert!(assertions::summary_is_consistent(&result, instance.stock));
        assert!((result.summary.waste_percent - 64.0).abs() < 1e-3);
    }

    #[test_case(0.0; "no kerf")]
    #[test_case(3.0; "standard kerf")]
    #[test_case(12.5; "wide kerf")]
    fn every_instance_is_placed_or_rejected_exactly_once(kerf: f32) {
        let instance = instance(
            1220.0,
            2440.0,
            kerf,
            &[
                (600.0, 400.0, 5),
                (762.0, 400.0, 2),
                (800.0, 300.0, 3),
                (450.0, 450.0, 4),
                (1300.0, 90.0, 2),
                (3000.0, 3000.0, 1),
            ],
        );
        let result = ShelfPacker::new(instance.clone()).solve();

        assert!(assertions::all_instances_accounted_for(&instance, &result));
        assert!(assertions::summary_is_consistent(&result, instance.stock));
        for layout in &result.layouts {
            assert!(assertions::no_placed_parts_overlap(layout));
            assert!(assertions::placed_parts_within_stock(layout, instance.stock));
            assert!(assertions::waste_is_disjoint(layout, instance.stock));
        }
        // the 3000x3000 part fits nothing
        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.unplaced[0].request_id, 5);
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let instance = instance(
            1220.0,
            2440.0,
            3.0,
            &[(600.0, 400.0, 4), (450.0, 450.0, 3), (200.0, 180.0, 7)],
        );
        let packer = ShelfPacker::new(instance);
        assert_eq!(packer.solve(), packer.solve());
    }

    #[test]
    fn expansion_orders_by_height_then_width_stably() {
        let requests = vec![
            PartRequest::new(0, 10.0, 10.0, 2),
            PartRequest::new(1, 20.0, 5.0, 1),
            PartRequest::new(2, 10.0, 30.0, 1),
            PartRequest::new(3, 15.0, 10.0, 1),
        ];
        let instances = expand_and_order(&requests);

        assert_eq!(instances.len(), 5);
        let order: Vec<usize> = instances.iter().map(|inst| inst.request_id).collect();
        // desc height; within height 10: desc width (15 before 10); the two
        // quantity-expanded copies of request 0 keep their insertion order
        assert_eq!(order, vec![2, 3, 0, 0, 1]);

        let mut ids: Vec<usize> = instances.iter().map(|inst| inst.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_request_list_produces_an_empty_result() {
        let instance = instance(1220.0, 2440.0, 3.0, &[]);
        let result = ShelfPacker::new(instance).solve();

        assert!(result.layouts.is_empty());
        assert!(result.unplaced.is_empty());
        assert_eq!(result.summary.sheets_needed, 0);
        assert_eq!(result.summary.waste_percent, 0.0);
    }

    #[test]
    fn near_boundary_widths_are_not_falsely_rejected() {
        // 90.00001 vs a usable width of exactly 90: within tolerance of an exact fit
        let instance = instance(100.0, 100.0, 5.0, &[(90.00001, 20.0, 1)]);
        let result = ShelfPacker::new(instance).solve();

        assert!(result.unplaced.is_empty());
        assert_eq!(result.summary.sheets_needed, 1);
    }

    #[test]
    fn waste_is_trailing_gaps_plus_bottom_strip() {
        let stock = StockSheet {
            width: 100.0,
            height: 100.0,
        };
        let shelves = vec![
            Shelf {
                y: 2.0,
                height: 40.0,
                current_x: 80.0,
            },
            Shelf {
                y: 44.0,
                height: 20.0,
                current_x: 99.5, // past the usable width, no gap to report
            },
        ];
        let waste = compute_waste(&shelves, 66.0, stock, 2.0);

        assert_eq!(waste.len(), 2);
        assert_eq!((waste[0].x_min, waste[0].y_min), (80.0, 2.0));
        assert_eq!((waste[0].width(), waste[0].height()), (19.0, 40.0));
        assert_eq!((waste[1].x_min, waste[1].y_min), (0.0, 66.0));
        assert_eq!((waste[1].width(), waste[1].height()), (100.0, 33.0));
    }

    #[test]
    fn contract_violations_fail_fast() {
        let stock = StockSheet {
            width: 1220.0,
            height: 2440.0,
        };
        assert!(
            CutInstance::try_new(
                StockSheet {
                    width: 0.0,
                    height: 2440.0
                },
                3.0,
                vec![]
            )
            .is_err()
        );
        assert!(CutInstance::try_new(stock, -1.0, vec![]).is_err());
        assert!(
            CutInstance::try_new(stock, 3.0, vec![PartRequest::new(0, 600.0, 0.0, 1)]).is_err()
        );
        assert!(
            CutInstance::try_new(stock, 3.0, vec![PartRequest::new(0, 600.0, 400.0, 0)]).is_err()
        );
    }

    #[test]
    fn ext_instance_parses_from_json() {
        let json = r#"{
            "name": "test job",
            "sheet": { "width": 1220.0, "height": 2440.0 },
            "kerf": 3.0,
            "parts": [
                { "width": 600.0, "height": 400.0, "quantity": 4 }
            ]
        }"#;
        let ext_instance: ExtCutInstance = serde_json::from_str(json).unwrap();
        let instance = shelfpack::io::import(&ext_instance).unwrap();

        assert_eq!(instance.requests.len(), 1);
        assert_eq!(instance.total_part_qty(), 4);
        let result = ShelfPacker::new(instance).solve();
        assert_eq!(result.summary.sheets_needed, 1);
    }
}
