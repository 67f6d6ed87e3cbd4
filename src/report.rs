//! Presentation of a [`FinancingSummary`] in Brazilian Portuguese
//! (`R$ 130.000,00`, `166,6572%`, `4 anos e 8 meses`).

use crate::schedule::{EarlyPayoff, FinancingSummary};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayKind {
    Money,
    Percent,
    Duration,
}

/// Summary fields shown in the report, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SummaryField {
    TermMonths,
    MonthsToPayoffAccelerated,
    FinancedAmount,
    TotalPaidBaseline,
    TotalPaidAccelerated,
    ExtraMonthlyBudget,
    AmountSaved,
    EffectiveCostTotalBaseline,
    EffectiveCostAnnualBaseline,
    AnnualEffectiveRate,
    MonthlyRate,
    EffectiveCostTotalAccelerated,
    EffectiveCostAnnualAccelerated,
}

impl SummaryField {
    pub const ALL: [SummaryField; 13] = [
        SummaryField::TermMonths,
        SummaryField::MonthsToPayoffAccelerated,
        SummaryField::FinancedAmount,
        SummaryField::TotalPaidBaseline,
        SummaryField::TotalPaidAccelerated,
        SummaryField::ExtraMonthlyBudget,
        SummaryField::AmountSaved,
        SummaryField::EffectiveCostTotalBaseline,
        SummaryField::EffectiveCostAnnualBaseline,
        SummaryField::AnnualEffectiveRate,
        SummaryField::MonthlyRate,
        SummaryField::EffectiveCostTotalAccelerated,
        SummaryField::EffectiveCostAnnualAccelerated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryField::TermMonths => "Tempo proposto de pagamento",
            SummaryField::MonthsToPayoffAccelerated => "Tempo de pagamento amortizado",
            SummaryField::FinancedAmount => "Valor financiado",
            SummaryField::TotalPaidBaseline => "Valor pago no tempo proposto",
            SummaryField::TotalPaidAccelerated => "Valor pago amortizado",
            SummaryField::ExtraMonthlyBudget => "Valor disponível para pagamento",
            SummaryField::AmountSaved => "Economia por amortizar",
            SummaryField::EffectiveCostTotalBaseline => "CET",
            SummaryField::EffectiveCostAnnualBaseline => "CET calculado",
            SummaryField::AnnualEffectiveRate => "CET / ano",
            SummaryField::MonthlyRate => "CET / mês",
            SummaryField::EffectiveCostTotalAccelerated => "CET amortização",
            SummaryField::EffectiveCostAnnualAccelerated => "CET / ano calculado amortização",
        }
    }

    pub fn kind(&self) -> DisplayKind {
        match self {
            SummaryField::TermMonths | SummaryField::MonthsToPayoffAccelerated => {
                DisplayKind::Duration
            }
            SummaryField::FinancedAmount
            | SummaryField::TotalPaidBaseline
            | SummaryField::TotalPaidAccelerated
            | SummaryField::ExtraMonthlyBudget
            | SummaryField::AmountSaved => DisplayKind::Money,
            SummaryField::EffectiveCostTotalBaseline
            | SummaryField::EffectiveCostAnnualBaseline
            | SummaryField::AnnualEffectiveRate
            | SummaryField::MonthlyRate
            | SummaryField::EffectiveCostTotalAccelerated
            | SummaryField::EffectiveCostAnnualAccelerated => DisplayKind::Percent,
        }
    }

    pub fn value(&self, summary: &FinancingSummary) -> f64 {
        match self {
            SummaryField::TermMonths => f64::from(summary.term_months),
            SummaryField::MonthsToPayoffAccelerated => {
                f64::from(summary.months_to_payoff_accelerated)
            }
            SummaryField::FinancedAmount => summary.financed_amount,
            SummaryField::TotalPaidBaseline => summary.total_paid_baseline,
            SummaryField::TotalPaidAccelerated => summary.total_paid_accelerated,
            SummaryField::ExtraMonthlyBudget => summary.extra_monthly_budget,
            SummaryField::AmountSaved => summary.amount_saved,
            SummaryField::EffectiveCostTotalBaseline => summary.effective_cost_total_baseline,
            SummaryField::EffectiveCostAnnualBaseline => summary.effective_cost_annual_baseline,
            SummaryField::AnnualEffectiveRate => summary.annual_effective_rate,
            SummaryField::MonthlyRate => summary.monthly_rate,
            SummaryField::EffectiveCostTotalAccelerated => {
                summary.effective_cost_total_accelerated
            }
            SummaryField::EffectiveCostAnnualAccelerated => {
                summary.effective_cost_annual_accelerated
            }
        }
    }

    pub fn format(&self, summary: &FinancingSummary) -> String {
        let value = self.value(summary);
        match self.kind() {
            DisplayKind::Money => format_money(value),
            DisplayKind::Percent => format_percent(value),
            DisplayKind::Duration => format_months(value as u32),
        }
    }
}

/// `(label, formatted value)` for every [`SummaryField`], in display order.
pub fn summary_rows(summary: &FinancingSummary) -> Vec<(&'static str, String)> {
    SummaryField::ALL
        .iter()
        .map(|field| (field.label(), field.format(summary)))
        .collect()
}

pub fn early_payoff_notice(notice: &EarlyPayoff) -> String {
    format!(
        "Estava planejado pagar em {}, mas foi pago em {}",
        format_months(notice.planned_months),
        format_months(notice.actual_months)
    )
}

pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0. && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("R$ {}{},{}", sign, grouped, cents)
}

pub fn format_percent(rate: f64) -> String {
    format!("{:.4}%", rate * 100.).replace('.', ",")
}

pub fn format_months(months: u32) -> String {
    let years = months / 12;
    let months = months % 12;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format!("{} {}", years, if years == 1 { "ano" } else { "anos" }));
    }
    if months > 0 {
        parts.push(format!("{} {}", months, if months == 1 { "mês" } else { "meses" }));
    }

    if parts.is_empty() {
        "0 meses".to_string()
    } else {
        parts.join(" e ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanParameters;
    use crate::schedule::run_financing;
    use test_log::test;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(130000.), "R$ 130.000,00");
        assert_eq!(format_money(346654.34425933287), "R$ 346.654,34");
        assert_eq!(format_money(3000.), "R$ 3.000,00");
        assert_eq!(format_money(999.999), "R$ 1.000,00");
        assert_eq!(format_money(12.5), "R$ 12,50");
        assert_eq!(format_money(0.), "R$ 0,00");
        assert_eq!(format_money(-1234567.891), "R$ -1.234.567,89");
        assert_eq!(format_money(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.6665718789179451), "166,6572%");
        assert_eq!(format_percent(0.1166), "11,6600%");
        assert_eq!(format_percent(0.009233060291607975), "0,9233%");
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(0), "0 meses");
        assert_eq!(format_months(1), "1 mês");
        assert_eq!(format_months(11), "11 meses");
        assert_eq!(format_months(12), "1 ano");
        assert_eq!(format_months(13), "1 ano e 1 mês");
        assert_eq!(format_months(56), "4 anos e 8 meses");
        assert_eq!(format_months(360), "30 anos");
    }

    #[test]
    fn test_every_field_has_one_kind() {
        let money = SummaryField::ALL
            .iter()
            .filter(|f| f.kind() == DisplayKind::Money)
            .count();
        let durations = SummaryField::ALL
            .iter()
            .filter(|f| f.kind() == DisplayKind::Duration)
            .count();
        assert_eq!(money, 5);
        assert_eq!(durations, 2);
    }

    #[test]
    fn test_reference_summary_rows() {
        let params = LoanParameters::new(250000., 120000., 360, 0.1166, 3000.);
        let financing = run_financing(&params).unwrap();
        let rows = summary_rows(financing.summary());

        let expected = [
            ("Tempo proposto de pagamento", "30 anos"),
            ("Tempo de pagamento amortizado", "4 anos e 8 meses"),
            ("Valor financiado", "R$ 130.000,00"),
            ("Valor pago no tempo proposto", "R$ 346.654,34"),
            ("Valor pago amortizado", "R$ 166.805,36"),
            ("Valor disponível para pagamento", "R$ 3.000,00"),
            ("Economia por amortizar", "R$ 179.848,98"),
            ("CET", "166,6572%"),
            ("CET calculado", "3,3233%"),
            ("CET / ano", "11,6600%"),
            ("CET / mês", "0,9233%"),
            ("CET amortização", "28,3118%"),
            ("CET / ano calculado amortização", "5,4873%"),
        ];
        assert_eq!(rows.len(), expected.len());
        for ((label, value), (expected_label, expected_value)) in rows.iter().zip(expected) {
            assert_eq!(*label, expected_label);
            assert_eq!(value, expected_value);
        }

        assert_eq!(
            early_payoff_notice(&financing.early_payoff().unwrap()),
            "Estava planejado pagar em 30 anos, mas foi pago em 4 anos e 8 meses"
        );
    }
}
