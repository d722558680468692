#[cfg(test)]
mod tests {
    use boxpack::entities::{BoxType, Catalog, OVERFLOW_NOTE, Order, PackedOrder, Product};
    use boxpack::geometry::{Dimension, FitTest};
    use boxpack::io::export::export_packed_order;
    use boxpack::io::ext_repr::{ExtDimensions, ExtOrder, ExtPackRequest, ExtProduct};
    use boxpack::io::import::{Importer, import};
    use boxpack::packing::Packer;
    use boxpack::util::assertions;
    use itertools::Itertools;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn product(id: &str, [h, w, l]: [u32; 3]) -> Product {
        Product::new(id, Dimension::try_new(h, w, l).unwrap()).unwrap()
    }

    fn order(id: u64, products: &[(&str, [u32; 3])]) -> Order {
        let products = products
            .iter()
            .map(|(pid, dims)| product(pid, *dims))
            .collect_vec();
        Order::new(id, products).unwrap()
    }

    /// (box id, product ids) of every box, in the order they were opened
    fn summary(packed: &PackedOrder) -> Vec<(Option<&str>, Vec<&str>)> {
        packed
            .boxes
            .iter()
            .map(|b| (b.id(), b.product_ids().collect_vec()))
            .collect_vec()
    }

    fn pack(order: &Order) -> PackedOrder {
        init_logger();
        let packed = Packer::default().pack(order);
        assert!(assertions::packing_is_complete(order, &packed));
        assert!(assertions::boxes_are_consistent(&packed));
        packed
    }

    #[test_case([25, 15, 20], Some("Box 1"); "fits box 1")]
    #[test_case([10, 10, 10], Some("Box 1"); "small cube")]
    #[test_case([80, 30, 40], Some("Box 1"); "box 1 after rotation")]
    #[test_case([31, 31, 31], Some("Box 2"); "too thick for box 1")]
    #[test_case([51, 51, 41], Some("Box 3"); "only box 3")]
    #[test_case([120, 60, 70], None; "too large")]
    #[test_case([100, 100, 100], None; "large cube")]
    #[test_case([1, 1, 81], None; "too long")]
    fn single_product(dims: [u32; 3], expected_box: Option<&str>) {
        let order = order(1, &[("product", dims)]);
        let packed = pack(&order);

        assert_eq!(packed.order_id, 1);
        assert_eq!(summary(&packed), vec![(expected_box, vec!["product"])]);
        let expected_note = match expected_box {
            Some(_) => None,
            None => Some(OVERFLOW_NOTE),
        };
        assert_eq!(packed.boxes[0].note(), expected_note);
    }

    #[test]
    fn two_products_share_box_1() {
        let order = order(1, &[("console", [40, 10, 25]), ("steering_wheel", [40, 30, 30])]);
        let packed = pack(&order);

        assert_eq!(
            summary(&packed),
            vec![(Some("Box 1"), vec!["steering_wheel", "console"])]
        );
        assert!(packed.boxes[0].note().is_none());
    }

    #[test]
    fn keyboard_and_mouse() {
        let order = order(4, &[("mouse", [5, 8, 12]), ("keyboard", [4, 45, 15])]);
        let packed = pack(&order);

        assert_eq!(packed.order_id, 4);
        assert_eq!(
            summary(&packed),
            vec![(Some("Box 1"), vec!["keyboard", "mouse"])]
        );
    }

    #[test]
    fn products_sorted_by_descending_volume() {
        let order = order(10, &[("p3", [4, 4, 4]), ("p1", [10, 10, 10]), ("p2", [5, 5, 5])]);
        let packed = pack(&order);

        assert_eq!(
            summary(&packed),
            vec![(Some("Box 1"), vec!["p1", "p2", "p3"])]
        );
    }

    #[test]
    fn equal_volumes_keep_input_order() {
        let order = order(11, &[("b", [2, 3, 4]), ("a", [4, 3, 2]), ("c", [3, 4, 2])]);
        let packed = pack(&order);

        assert_eq!(summary(&packed), vec![(Some("Box 1"), vec!["b", "a", "c"])]);
    }

    #[test]
    fn split_over_two_boxes() {
        let order = order(
            6,
            &[
                ("webcam", [7, 10, 5]),
                ("microphone", [25, 10, 10]),
                ("monitor", [50, 60, 20]),
                ("notebook", [2, 35, 25]),
            ],
        );
        let packed = pack(&order);

        assert_eq!(
            summary(&packed),
            vec![
                (Some("Box 1"), vec!["microphone", "notebook", "webcam"]),
                (Some("Box 2"), vec!["monitor"]),
            ]
        );
        assert_eq!(packed.n_overflow_boxes(), 0);
    }

    #[test]
    fn mixed_fitting_and_oversized() {
        let order = order(
            9,
            &[("small_1", [5, 5, 5]), ("giant", [200, 200, 200]), ("small_2", [6, 6, 6])],
        );
        let packed = pack(&order);

        assert_eq!(
            summary(&packed),
            vec![
                (Some("Box 1"), vec!["small_2", "small_1"]),
                (None, vec!["giant"]),
            ]
        );
        assert_eq!(packed.boxes[1].note(), Some(OVERFLOW_NOTE));
        assert_eq!(packed.boxes[1].remaining_volume, 0);
    }

    #[test]
    fn overflow_boxes_are_never_merged() {
        let order = order(12, &[("big", [100, 100, 100]), ("bigger", [200, 200, 200])]);
        let packed = pack(&order);

        assert_eq!(
            summary(&packed),
            vec![(None, vec!["bigger"]), (None, vec!["big"])]
        );
        assert_eq!(packed.n_overflow_boxes(), 2);
        assert_eq!(packed.product_volume(), 100u64.pow(3) + 200u64.pow(3));
        assert_eq!(packed.usage(), 0.0);
    }

    #[test]
    fn empty_order() {
        let order = order(7, &[]);
        let packed = pack(&order);

        assert_eq!(packed.order_id, 7);
        assert!(packed.boxes.is_empty());

        let exported = export_packed_order(&packed);
        assert_eq!(exported.order_id, 7);
        assert!(exported.boxes.is_empty());
    }

    #[test]
    fn first_box_type_in_catalog_wins() {
        // fits in both Box 1 and the larger Box 2
        let order = order(13, &[("cube", [20, 20, 20])]);
        let packed = pack(&order);

        assert_eq!(packed.boxes[0].id(), Some("Box 1"));
    }

    #[test]
    fn remaining_volume_bookkeeping() {
        let order = order(14, &[("a", [10, 10, 10]), ("b", [5, 5, 5])]);
        let packed = pack(&order);

        assert_eq!(packed.n_boxes(), 1);
        assert_eq!(packed.boxes[0].remaining_volume, 30 * 40 * 80 - 1000 - 125);
        assert_eq!(packed.boxes[0].product_volume(), 1125);
        assert_eq!(packed.product_volume(), 1125);
    }

    #[test_case(FitTest::Exact, "Box 1"; "exact")]
    #[test_case(FitTest::Simplified, "Box 2"; "simplified")]
    fn fit_test_variants(fit_test: FitTest, expected_box: &str) {
        init_logger();
        let order = order(15, &[("standing", [80, 30, 40])]);
        let packed = Packer::new(Catalog::default(), fit_test).pack(&order);

        assert_eq!(packed.boxes[0].id(), Some(expected_box));
    }

    #[test]
    fn custom_catalog() {
        init_logger();
        let tiny = BoxType::new("Tiny", Dimension::try_new(10, 10, 10).unwrap()).unwrap();
        let catalog = Catalog::new(vec![tiny]).unwrap();
        let products = (0..9)
            .map(|i| (format!("cube_{i}"), [5, 5, 5]))
            .collect_vec();
        let products = products
            .iter()
            .map(|(id, dims)| (id.as_str(), *dims))
            .collect_vec();
        let order = order(16, &products);

        let packed = Packer::new(catalog, FitTest::Exact).pack(&order);

        assert!(assertions::packing_is_complete(&order, &packed));
        // a single row of two cubes fits along any axis, a 2x2 footprint does not
        assert_eq!(
            packed.boxes.iter().map(|b| b.products.len()).collect_vec(),
            vec![2, 2, 2, 2, 1]
        );
        assert!(packed.boxes.iter().all(|b| b.id() == Some("Tiny")));
        assert_eq!(
            packed.boxes[0].product_ids().collect_vec(),
            vec!["cube_0", "cube_1"]
        );
    }

    #[test]
    fn export_overflow_box() {
        let order = order(17, &[("giant", [120, 60, 70])]);
        let packed = pack(&order);
        let exported = export_packed_order(&packed);

        assert_eq!(exported.order_id, 17);
        assert_eq!(exported.boxes.len(), 1);
        assert_eq!(exported.boxes[0].box_id, None);
        assert_eq!(exported.boxes[0].products, vec!["giant".to_string()]);
        assert_eq!(exported.boxes[0].note.as_deref(), Some(OVERFLOW_NOTE));
    }

    #[test]
    fn invalid_entities_are_rejected() {
        let dim = Dimension::try_new(1, 1, 1).unwrap();
        assert!(Product::new("", dim).is_err());
        assert!(BoxType::new("", dim).is_err());
        assert!(Order::new(1, vec![product("a", [1, 1, 1]), product("a", [2, 2, 2])]).is_err());

        // dimensions built without validation
        let flat = Dimension {
            height: 0,
            width: 10,
            length: 10,
        };
        let void = Dimension {
            height: 0,
            width: 0,
            length: 0,
        };
        assert!(Product::new("flat", flat).is_err());
        assert!(BoxType::new("void", void).is_err());
        assert!(BoxType::new("flat", flat).is_err());
    }

    fn ext_product(id: &str, height: u32, width: u32, length: u32) -> ExtProduct {
        ExtProduct {
            product_id: id.to_string(),
            dimensions: ExtDimensions {
                height,
                width,
                length,
            },
        }
    }

    #[test]
    fn import_order() {
        let importer = Importer::default();
        let ext_order = ExtOrder {
            order_id: 3,
            products: Some(vec![ext_product("a", 1, 2, 3), ext_product("b", 3, 2, 1)]),
        };
        let order = importer.import_order(&ext_order).unwrap();
        assert_eq!(order.id, 3);
        assert_eq!(order.products.iter().map(|p| p.id.as_str()).collect_vec(), ["a", "b"]);
        assert_eq!(order.product_volume(), 12);
    }

    #[test]
    fn import_rejects_invalid_orders() {
        let importer = Importer::default();

        let missing_products = ExtOrder {
            order_id: 1,
            products: None,
        };
        assert!(importer.import_order(&missing_products).is_err());

        let empty_products = ExtOrder {
            order_id: 1,
            products: Some(vec![]),
        };
        assert!(importer.import_order(&empty_products).is_ok());

        let zero_extent = ExtOrder {
            order_id: 1,
            products: Some(vec![ext_product("flat", 10, 0, 10)]),
        };
        assert!(importer.import_order(&zero_extent).is_err());

        let too_large = ExtOrder {
            order_id: 1,
            products: Some(vec![ext_product("a", 1, 1, 1), ext_product("b", 1, 1, 1)]),
        };
        assert!(Importer::new(Some(1)).import_order(&too_large).is_err());
        assert!(Importer::new(Some(2)).import_order(&too_large).is_ok());
    }

    #[test]
    fn import_reports_first_invalid_order() {
        let importer = Importer::default();
        let mut orders = (0..32)
            .map(|i| ExtOrder {
                order_id: i,
                products: Some(vec![ext_product("a", 1, 2, 3)]),
            })
            .collect_vec();
        orders[5].products = None;
        orders[20].products = Some(vec![ext_product("flat", 10, 0, 10)]);
        orders[31].products = None;
        let ext_request = ExtPackRequest { orders };

        for _ in 0..10 {
            let err = import(&importer, &ext_request).unwrap_err();
            assert_eq!(format!("{err:#}"), "order 5 has no product list");
        }
    }
}
