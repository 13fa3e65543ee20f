#[cfg(test)]
mod tests {
    use std::path::Path;

    use binpack::heuristics::{Heuristic, best_fit, first_fit, first_fit_decreasing};
    use binpack::util::assertions;
    use ffit::config::FFitConfig;
    use ffit::io;
    use ffit::solve::solve_all;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const N_RANDOM_INSTANCES: usize = 100;
    const MAX_RANDOM_ITEMS: usize = 64;

    #[test_case("../assets/classic.txt", &[[2, 2, 2], [4, 4, 4], [4, 3, 4]]; "classic")]
    #[test_case("../assets/single.txt", &[[1, 1, 1]]; "single")]
    fn test_instance(instance_path: &str, expected: &[[usize; 3]]) {
        let instances = io::read_instances(Path::new(instance_path)).unwrap();
        assert_eq!(instances.len(), expected.len());

        let reports = solve_all(instances, &FFitConfig::default()).unwrap();
        for (report, expected) in reports.iter().zip(expected) {
            assert_eq!(
                report
                    .solutions
                    .iter()
                    .map(|sol| sol.heuristic)
                    .collect::<Vec<_>>(),
                Heuristic::ALL.to_vec()
            );
            let counts = report
                .solutions
                .iter()
                .map(|sol| sol.n_bins)
                .collect::<Vec<_>>();
            assert_eq!(&counts, expected);
        }
    }

    #[test]
    fn reads_exactly_the_announced_number_of_weights() {
        // a read overrun on case 0 would swallow case 1's capacity and fail the parse
        let instances = io::parse_instances("2  5 3  1 2 3  7 2  4 4").unwrap();
        assert_eq!(instances[0].capacity, 5);
        assert_eq!(instances[0].weights, vec![1, 2, 3]);
        assert_eq!(instances[1].capacity, 7);
        assert_eq!(instances[1].weights, vec![4, 4]);
    }

    #[test]
    fn reads_exactly_the_announced_number_of_cases() {
        let instances = io::parse_instances("1  5 1  3  99 99 99").unwrap();
        assert_eq!(instances.len(), 1);
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(io::parse_instances("2  5 3  1 2").is_err());
        assert!(io::parse_instances("").is_err());
    }

    #[test]
    fn rejects_malformed_cases_with_context() {
        // oversized item
        let err = io::parse_instances("1  5 2  3 6").unwrap_err();
        assert!(err.to_string().contains("test case 0"));
        // zero capacity
        assert!(io::parse_instances("1  0 1  0").is_err());
        // non-integer token
        assert!(io::parse_instances("1  ten 1  3").is_err());
    }

    #[test]
    fn sequential_and_parallel_runs_agree() {
        let instances = io::read_instances(Path::new("../assets/classic.txt")).unwrap();

        let sequential_config = FFitConfig {
            parallelize: false,
            ..FFitConfig::default()
        };
        let sequential = solve_all(instances.clone(), &sequential_config).unwrap();
        let parallel = solve_all(instances, &FFitConfig::default()).unwrap();

        for (seq, par) in sequential.iter().zip(&parallel) {
            assert_eq!(seq.instance, par.instance);
            assert_eq!(seq.solutions, par.solutions);
        }
    }

    #[test]
    fn random_instances_respect_the_packing_bounds() {
        let mut rng = SmallRng::seed_from_u64(0);

        for _ in 0..N_RANDOM_INSTANCES {
            let capacity = rng.random_range(1..=100u64);
            let n_items = rng.random_range(0..=MAX_RANDOM_ITEMS);
            let weights: Vec<u64> = (0..n_items)
                .map(|_| rng.random_range(0..=capacity))
                .collect();

            let ff = first_fit(&weights, capacity).unwrap();
            let ffd = first_fit_decreasing(&weights, capacity).unwrap();
            let bf = best_fit(&weights, capacity).unwrap();

            if weights.is_empty() {
                assert_eq!((ff, ffd, bf), (0, 0, 0));
                continue;
            }

            assert!(assertions::bin_count_in_bounds(&weights, capacity, ff));
            assert!(assertions::bin_count_in_bounds(&weights, capacity, ffd));
            assert!(assertions::bin_count_in_bounds(&weights, capacity, bf));
            assert!(ffd <= ff, "ffd {ffd} > ff {ff} for {weights:?} / {capacity}");

            // purity: a second invocation sees the same inputs and yields the same counts
            assert_eq!(first_fit(&weights, capacity).unwrap(), ff);
            assert_eq!(first_fit_decreasing(&weights, capacity).unwrap(), ffd);
            assert_eq!(best_fit(&weights, capacity).unwrap(), bf);
        }
    }
}
