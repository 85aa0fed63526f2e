#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use log::LevelFilter;
    use test_case::test_case;

    use dbf::config::DBFConfig;
    use dbf::io;
    use dbf::io::output::DBFOutput;
    use dbf::io::sheet_to_svg::sheet_to_svg;
    use dbf::opt::DBFOptimizer;
    use sheetpack::io::ext_repr::ExtInstance;
    use sheetpack::io::{export, import};
    use sheetpack::util::assertions;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Warn)
            .is_test(true)
            .try_init();
    }

    #[test_case("../assets/components.csv", false; "dataset, sequential")]
    #[test_case("../assets/components.csv", true; "dataset, parallel")]
    #[test_case("../assets/components.json", true; "instance")]
    fn test_instance(instance_path: &str, parallel: bool) {
        init_logger();
        let config = DBFConfig {
            parallel,
            ..DBFConfig::default()
        };
        let ext_instance =
            io::read_instance(Path::new(instance_path), config.pack_config.margin).unwrap();
        let optimizer =
            DBFOptimizer::new(import::import(&ext_instance).unwrap(), config).unwrap();
        let solutions = optimizer.solve().unwrap();

        assert_eq!(solutions.len(), optimizer.batches.len());
        for (batch, solution) in optimizer.batches.iter().zip(&solutions) {
            assert!(assertions::solution_matches_batch(solution, batch));
            assert_eq!(batch.label, solution.label);
        }

        let ext_solution =
            export::export(&optimizer.batches, &solutions, &config.pack_config).unwrap();
        let n_rows = ext_solution
            .batches
            .iter()
            .map(|b| b.rows.len())
            .sum::<usize>();
        let n_items = optimizer.batches.iter().map(|b| b.len()).sum::<usize>();
        assert_eq!(n_rows, n_items);

        for row in ext_solution.batches.iter().flat_map(|b| b.rows.iter()) {
            let margin = config.pack_config.margin;
            assert!(row.x >= margin && row.y >= margin);
            assert!(row.cumulative_weight <= config.pack_config.weight_capacity);
        }
    }

    #[test]
    fn dataset_is_split_into_half_days() {
        init_logger();
        let ext_instance = io::read_instance(Path::new("../assets/components.csv"), 5.0).unwrap();
        assert_eq!(ext_instance.name, "components");

        let labels = ext_instance
            .batches
            .iter()
            .map(|b| b.label.clone().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["2024-05-02 AM", "2024-05-02 PM", "2024-05-03 AM", "2024-05-03 PM"]
        );
        // the record with the invalid timestamp is gone
        assert!(
            ext_instance
                .batches
                .iter()
                .flat_map(|b| b.items.iter())
                .all(|i| i.id != "SN9999")
        );
        for batch in &ext_instance.batches {
            assert!(batch.items.is_sorted_by_key(|i| i.timestamp));
        }
    }

    #[test]
    fn solution_files_are_written() {
        init_logger();
        let config = DBFConfig {
            svg_export: true,
            ..DBFConfig::default()
        };
        let folder = std::env::temp_dir().join(format!("dbf_test_{}", std::process::id()));
        fs::create_dir_all(&folder).unwrap();

        let ext_instance: ExtInstance =
            io::read_json_instance(Path::new("../assets/components.json")).unwrap();
        let optimizer =
            DBFOptimizer::new(import::import(&ext_instance).unwrap(), config).unwrap();
        let solutions = optimizer.solve().unwrap();
        let ext_solution =
            export::export(&optimizer.batches, &solutions, &config.pack_config).unwrap();

        let csv_path = folder.join("sol_components.csv");
        io::write_rows_csv(&ext_solution, &csv_path, true).unwrap();
        let csv = fs::read_to_string(&csv_path).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.split(',').count() == 6));

        let svg_path = folder.join("sol_components_0_1.svg");
        let svg = sheet_to_svg(
            &solutions[0].sheets[0],
            &optimizer.batches[0],
            config.pack_config.margin,
            config.svg_draw_options,
            "AM",
        );
        io::write_svg(&svg, &svg_path).unwrap();
        assert!(svg_path.exists());

        let json_path = folder.join("sol_components.json");
        let output = DBFOutput {
            instance: ext_instance,
            solution: ext_solution,
            config,
        };
        io::write_json(&output, &json_path).unwrap();
        let read_back: DBFOutput =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(read_back.solution, output.solution);
        assert_eq!(read_back.config, config);

        fs::remove_dir_all(&folder).unwrap();
    }
}
