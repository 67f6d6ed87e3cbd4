use financing::{run_financing, FinancingError, LoanParameters};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}

#[test]
fn reference_run_totals() {
    let params = LoanParameters::new(250000., 120000., 360, 0.1166, 3000.);
    let summary = run_financing(&params).expect("reference run").into_summary();

    assert_eq!(summary.financed_amount, 130000.);
    assert_close(summary.total_paid_baseline, 346654.34, 0.01);
    assert_eq!(summary.months_to_payoff_accelerated, 56);
    assert_close(summary.total_paid_accelerated, 166805.36, 0.01);
    assert_close(summary.amount_saved, 179848.98, 0.01);
}

#[test]
fn baseline_always_covers_the_term() {
    for term_months in [1, 2, 7, 12, 60, 240, 420] {
        let params = LoanParameters::new(300000., 60000., term_months, 0.095, 2500.);
        let financing = run_financing(&params).expect("valid loan");

        assert_eq!(financing.baseline().len(), term_months as usize);
        assert!(financing.accelerated().len() <= term_months as usize);
        assert!(financing.summary().months_to_payoff_accelerated <= term_months);
        for (i, inst) in financing.baseline().iter().enumerate() {
            assert_eq!(inst.index as usize, i + 1);
        }
    }
}

#[test]
fn balances_are_non_increasing_and_non_negative() {
    for budget in [0., 900., 1800., 2500., 10000.] {
        let params = LoanParameters::new(300000., 60000., 240, 0.095, budget);
        let financing = run_financing(&params).expect("valid loan");

        for schedule in [financing.baseline(), financing.accelerated()] {
            for inst in schedule {
                assert!(inst.balance_after <= inst.balance_before);
                assert!(inst.balance_after >= 0.);
                assert_close(inst.total_due, inst.interest_due + inst.principal_due, 1e-9);
                assert_close(
                    inst.total_paid_with_extra,
                    inst.total_due + inst.extra_principal_paid,
                    1e-9,
                );
            }
        }
    }
}

#[test]
fn larger_budget_never_hurts() {
    let cases: [(LoanParameters, &[f64]); 2] = [
        (
            LoanParameters::new(250000., 120000., 360, 0.1166, 0.),
            &[0., 1000., 1500., 2000., 3000., 5000., 8000.],
        ),
        (
            LoanParameters::new(100000., 0., 120, 0.08, 0.),
            &[0., 1200., 1500., 2500., 4000.],
        ),
    ];

    for (base, budgets) in cases {
        let mut previous: Option<(u32, f64)> = None;
        for &budget in budgets {
            let mut params = base;
            params.extra_monthly_budget = budget;
            let summary = run_financing(&params).expect("valid loan").into_summary();

            if let Some((months, saved)) = previous {
                assert!(summary.months_to_payoff_accelerated <= months);
                assert!(summary.amount_saved >= saved);
            }
            previous = Some((summary.months_to_payoff_accelerated, summary.amount_saved));
        }
    }
}

#[test]
fn zero_budget_schedules_are_identical() {
    let params = LoanParameters::new(100000., 0., 120, 0.08, 0.);
    let financing = run_financing(&params).expect("valid loan");

    assert_eq!(financing.baseline(), financing.accelerated());
    assert_eq!(financing.summary().amount_saved, 0.);
    assert!(financing.early_payoff().is_none());
}

#[test]
fn invalid_parameters_produce_no_result() {
    let bad = [
        LoanParameters::new(250000., 120000., 0, 0.1166, 3000.),
        LoanParameters::new(250000., 250000., 360, 0.1166, 3000.),
        LoanParameters::new(250000., 120000., 360, -0.01, 3000.),
        LoanParameters::new(250000., 120000., 360, 0.1166, -1.),
        LoanParameters::new(f64::NAN, 120000., 360, 0.1166, 3000.),
    ];
    for params in bad {
        match run_financing(&params) {
            Err(FinancingError::InvalidParameters { .. }) => {}
            other => panic!("expected invalid parameters for {:?}, got {:?}", params, other),
        }
    }
}
