#[cfg(test)]
mod tests {
    use maritime_compliance::fleet::{annual_summary, VoyageRecord};
    use maritime_compliance::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn legacy_calculator() -> ComplianceCalculator {
        ComplianceCalculator::new(CalculatorConfig {
            pre_phase_in: PrePhaseInCoverage::FullCoverage,
            ..Default::default()
        })
        .expect("test: valid config")
    }

    // ========== Dataset Integrity ==========

    #[test]
    fn test_every_published_target_matches_its_reduction() {
        let dataset = RegulatoryDataset::current();
        dataset.verify_integrity().expect("test: dataset verifies");

        for regime in [Regime::FuelEuMaritime, Regime::ImoNetZero] {
            let schedule = dataset.schedule(regime).expect("test: intensity regime");
            for entry in schedule.entries {
                let derived = schedule.baseline * (Decimal::ONE - entry.reduction_percent / dec!(100));
                assert!(
                    (derived - entry.intensity).abs() <= dec!(0.01),
                    "{regime} {}: published {} derived {derived}",
                    entry.key,
                    entry.intensity
                );
            }
        }
    }

    #[test]
    fn test_string_keys_resolve_to_typed_entries() {
        let dataset = RegulatoryDataset::current();
        let key: TargetKey = "2030_aspirational".parse().expect("test: valid key");
        let entry = dataset.target_for(Regime::ImoNetZero, key).expect("test: published");
        assert_eq!(entry.intensity, dec!(63.81));

        assert!(matches!(
            "2030_aspirationl".parse::<TargetKey>(),
            Err(ComplianceError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_lookup_failures_are_typed() {
        let dataset = RegulatoryDataset::current();
        assert!(matches!(
            dataset.fuel_property_by_code("diesel-ish"),
            Err(ComplianceError::UnknownFuel(_))
        ));
        assert!(matches!(
            dataset.voyage_coverage_by_name(Regime::EuEts, "OTHER"),
            Err(ComplianceError::UnknownVoyageClass(_))
        ));
        assert!(matches!(
            dataset.voyage_coverage_by_name(Regime::EuEts, "uk-domestic"),
            Err(ComplianceError::UnknownVoyageClass(_))
        ));
        assert!(matches!(
            dataset.target_for(Regime::ImoNetZero, TargetKey::Year(2035)),
            Err(ComplianceError::UnknownYear { year: 2035, .. })
        ));
    }

    // ========== Penalty (FuelEU) ==========

    #[test]
    fn test_penalty_zero_at_or_below_target() {
        for current in [dec!(-5), dec!(0), dec!(50), dec!(89.33), dec!(89.34)] {
            let p = penalty_for_intensity_gap(current, dec!(89.34), dec!(10000000)).expect("test: valid");
            assert_eq!(p.amount, Decimal::ZERO, "current {current}");
        }
    }

    #[test]
    fn test_penalty_currency_is_eur() {
        let p = penalty_for_intensity_gap(dec!(95), dec!(89.34), dec!(1000000)).expect("test: valid");
        assert_eq!(p.currency, Currency::Eur);
        // 5.66 g/MJ × 1 TJ = 5.66 t
        assert_eq!(p.amount, dec!(13584));
    }

    // ========== ETS Cost (EU ETS) ==========

    #[test]
    fn test_ets_cost_2026_intra_regional_exact() {
        let cost = ets_cost(dec!(1000), VoyageClass::IntraRegional, 2026).expect("test: valid");
        let expected = dec!(1000) * dec!(3.114) * dec!(1.00) * dec!(1.00) * dec!(85);
        assert_eq!(cost.amount, expected);
        assert_eq!(cost.currency, Currency::Eur);
    }

    #[test]
    fn test_ets_cost_2023_zero_coverage_policy() {
        let cost = ets_cost(dec!(1000), VoyageClass::IntraRegional, 2023).expect("test: valid");
        assert_eq!(cost.amount, Decimal::ZERO);
    }

    #[test]
    fn test_ets_cost_2023_full_coverage_policy() {
        let calc = legacy_calculator();
        let y2023 = calc.ets_cost(dec!(1000), VoyageClass::IntraRegional, 2023).expect("test: valid");
        let y2026 = calc.ets_cost(dec!(1000), VoyageClass::IntraRegional, 2026).expect("test: valid");
        assert_eq!(y2023, y2026);
    }

    #[test]
    fn test_ets_cost_zero_consumption_is_zero() {
        let cost = ets_cost(Decimal::ZERO, VoyageClass::ExtraRegional, 2025).expect("test: valid");
        assert!(cost.is_zero());
    }

    #[test]
    fn test_ets_cost_ramps_with_phase_in() {
        let costs: Vec<Decimal> = [2024, 2025, 2026, 2027, 2028]
            .iter()
            .map(|y| ets_cost(dec!(100), VoyageClass::IntraRegional, *y).expect("test: valid").amount)
            .collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{costs:?}");
        assert_eq!(costs[2], costs[4]);
    }

    // ========== Net-Zero Gap (IMO) ==========

    #[test]
    fn test_net_zero_2050_terminal_target() {
        let g = net_zero_gap(dec!(3.0), 2050).expect("test: valid");
        assert!(g.is_compliant);
        assert_eq!(g.gap, Decimal::ZERO);
        assert_eq!(g.target_intensity, dec!(3.65));
    }

    #[test]
    fn test_net_zero_partial_interpolation_is_strictly_between() {
        let baseline = dec!(91.16);
        let minimum_2030 = dec!(72.93);
        for year in 2026..2030 {
            let g = net_zero_gap(baseline, year).expect("test: valid");
            assert!(g.target_intensity < baseline && g.target_intensity > minimum_2030, "{year}");
            assert!(!g.is_compliant, "{year}");
            assert_eq!(g.tier, TargetTier::Interpolated);
        }
    }

    #[test]
    fn test_net_zero_trajectory_start_equals_baseline() {
        let g = net_zero_gap(dec!(91.16), 2025).expect("test: valid");
        assert_eq!(g.target_intensity, dec!(91.16));
        assert!(g.is_compliant);
    }

    #[test]
    fn test_net_zero_tier_boundaries() {
        let at = |year| net_zero_gap(Decimal::ZERO, year).expect("test: valid");
        assert_eq!(at(2029).tier, TargetTier::Interpolated);
        assert_eq!(at(2030).tier, TargetTier::Minimum2030);
        assert_eq!(at(2039).target_intensity, dec!(72.93));
        assert_eq!(at(2040).target_intensity, dec!(27.35));
        assert_eq!(at(2049).target_intensity, dec!(27.35));
        assert_eq!(at(2050).target_intensity, dec!(3.65));
        assert_eq!(at(2100).target_intensity, dec!(3.65));
    }

    #[test]
    fn test_net_zero_compliance_is_exact() {
        let just_over = net_zero_gap(dec!(72.931), 2030).expect("test: valid");
        assert!(!just_over.is_compliant);
        assert_eq!(just_over.gap, dec!(0.001));
        let at = net_zero_gap(dec!(72.93), 2030).expect("test: valid");
        assert!(at.is_compliant);
    }

    // ========== Purity ==========

    #[test]
    fn test_repeated_calls_are_identical() {
        let calc = ComplianceCalculator::default();
        for _ in 0..3 {
            assert_eq!(
                calc.ets_cost(dec!(321.5), VoyageClass::ExtraRegional, 2025),
                calc.ets_cost(dec!(321.5), VoyageClass::ExtraRegional, 2025)
            );
            assert_eq!(calc.net_zero_gap(dec!(80.1), 2028), calc.net_zero_gap(dec!(80.1), 2028));
        }
        RegulatoryDataset::current().verify_integrity().expect("test: dataset untouched");
    }

    #[test]
    fn test_calculator_shared_across_threads() {
        let calc = std::sync::Arc::new(ComplianceCalculator::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let calc = calc.clone();
                std::thread::spawn(move || {
                    calc.ets_cost(Decimal::from(100 * (i + 1)), VoyageClass::IntraRegional, 2026)
                        .expect("test: valid")
                })
            })
            .collect();
        let costs: Vec<Money> = handles
            .into_iter()
            .map(|h| h.join().expect("test: thread finished"))
            .collect();
        assert_eq!(costs[0].amount, dec!(26469));
        assert_eq!(costs[3].amount, dec!(105876));
    }

    // ========== Fleet Roll-up ==========

    #[test]
    fn test_fleet_summary_from_json_records() {
        let json = r#"[
            { "vessel_id": "IMO9321483",
              "consumptions": [{ "fuel": "HFO", "mass_tonnes": "1000" }],
              "eu_ets": "intra-regional" },
            { "vessel_id": "IMO9321483",
              "consumptions": [{ "fuel": "MGO", "mass_tonnes": "20", "methane_slip_pct": "0" }],
              "uk_ets": "extra-regional" }
        ]"#;
        let records: Vec<VoyageRecord> = serde_json::from_str(json).expect("test: valid JSON");
        let summary =
            annual_summary(&ComplianceCalculator::default(), 2026, &records).expect("test: valid fleet");
        assert_eq!(summary.eu_ets.cost.amount, dec!(264690));
        // 20 × 3.206 × 0.5 × 75
        assert_eq!(summary.uk_ets.cost.amount, dec!(2404.5));
        assert_eq!(summary.vessels.len(), 1);
    }
}
