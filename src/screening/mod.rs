// Transaction screening module
// Flags suspicious transactions behind a pluggable model seam and
// aggregates screening activity for the dashboard

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Transfer amount above which the native rule flags a transaction
const FLAG_AMOUNT: f64 = 10_000.0;

/// Transaction categories from the mobile-money payment dataset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Payment,
    Transfer,
    CashOut,
    CashIn,
    Debit,
}

impl TransactionKind {
    /// Categorical encoding a trained classifier expects for this kind
    pub fn feature_code(&self) -> u8 {
        match self {
            TransactionKind::Transfer => 0,
            TransactionKind::CashOut => 1,
            TransactionKind::Payment => 2,
            TransactionKind::Debit => 3,
            TransactionKind::CashIn => 4,
        }
    }
}

/// One transaction as submitted for screening
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Simulation hour the transaction occurred in
    pub step: u32,
    pub kind: TransactionKind,
    pub amount: f64,
    pub name_orig: String,
    pub old_balance_orig: f64,
    pub new_balance_orig: f64,
    pub name_dest: String,
    pub old_balance_dest: f64,
    pub new_balance_dest: f64,
}

/// Screening label stored with each transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Prediction {
    Fraud,
    Legit,
}

/// Model output for one transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FraudScore {
    pub is_fraud: bool,
    pub confidence: f64,
    pub risk_score: f64,
}

/// Transaction paired with its screening outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenedTransaction {
    pub transaction: Transaction,
    pub prediction: Prediction,
    pub confidence: f64,
    pub risk_score: f64,
}

/// Fraud classifier seam
///
/// Deployments with a trained model served elsewhere implement this over
/// their scoring call; `RuleBasedModel` keeps screening functional without
/// one. `&mut self` lets implementations carry an RNG or running state.
pub trait FraudModel {
    fn score(&mut self, transaction: &Transaction) -> FraudScore;
}

/// Native screening rule: large transfers are flagged
///
/// Confidence and risk score simulate the ranges a trained classifier
/// reports, drawn from a seeded RNG so runs are reproducible.
pub struct RuleBasedModel {
    rng: StdRng,
}

impl RuleBasedModel {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FraudModel for RuleBasedModel {
    fn score(&mut self, transaction: &Transaction) -> FraudScore {
        let is_fraud =
            transaction.kind == TransactionKind::Transfer && transaction.amount > FLAG_AMOUNT;

        FraudScore {
            is_fraud,
            confidence: round2(self.rng.gen_range(0.85..0.99)),
            risk_score: round2(self.rng.gen_range(0.5..0.99)),
        }
    }
}

/// Screen one transaction into its stored form
pub fn screen_transaction<M: FraudModel>(
    model: &mut M,
    transaction: &Transaction,
) -> ScreenedTransaction {
    let score = model.score(transaction);
    let prediction = if score.is_fraud {
        Prediction::Fraud
    } else {
        Prediction::Legit
    };

    if prediction == Prediction::Fraud {
        tracing::warn!(
            "🚨 flagged {:?} of {:.2} from {} to {}",
            transaction.kind,
            transaction.amount,
            transaction.name_orig,
            transaction.name_dest
        );
    }

    ScreenedTransaction {
        transaction: transaction.clone(),
        prediction,
        confidence: score.confidence,
        risk_score: score.risk_score,
    }
}

/// Screening activity rollup for the dashboard overview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityReport {
    pub total: usize,
    pub fraud: usize,
    pub safe: usize,
    pub types: HashMap<TransactionKind, usize>,
}

/// Count screening outcomes and the per-kind transaction mix
pub fn activity_report(screened: &[ScreenedTransaction]) -> ActivityReport {
    let fraud = screened
        .iter()
        .filter(|entry| entry.prediction == Prediction::Fraud)
        .count();

    let mut types: HashMap<TransactionKind, usize> = HashMap::new();
    for entry in screened {
        *types.entry(entry.transaction.kind).or_insert(0) += 1;
    }

    ActivityReport {
        total: screened.len(),
        fraud,
        safe: screened.len() - fraud,
        types,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
