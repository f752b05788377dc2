//! The Mastermind scoring circuit
//!
//! One fixed-shape halo2 circuit over the Pallas base field. The prover's
//! witness is the secret solution and salt; the guess, the declared hit and
//! blow counts, the declared solution sum, and the published commitment all
//! arrive through the instance column (see [`super::layout`]).
//!
//! Every check is a polynomial constraint evaluated against the one witness
//! assignment; there is no branching on secret data anywhere:
//! - range membership is the product `(x - 1)(x - 2)...(x - 6) = 0`;
//! - equality is the `out = 1 - x * x^-1` indicator with `x * out = 0`;
//! - the per-position comparisons are fully unrolled;
//! - double counting of repeated colors is prevented by taking, per color,
//!   the minimum of its occurrence counts in guess and solution, witnessed
//!   as `m` with `(m - a)(m - b) = 0` and both `a - m` and `b - m` held in
//!   the small count range.
//!
//! A violated constraint rejects the whole witness. There is no partial
//! acceptance and nothing is revealed about which position caused it.

use ff::{Field, PrimeField};
use halo2_gadgets::poseidon::{
    primitives::{ConstantLength, P128Pow5T3},
    Hash as PoseidonHash, Pow5Chip, Pow5Config,
};
use halo2_proofs::{
    circuit::{AssignedCell, Layouter, SimpleFloorPlanner, Value},
    pasta::Fp,
    plonk::{
        Advice, Circuit as PlonkCircuit, Column, ConstraintSystem, Error, Expression, Instance,
        Selector,
    },
    poly::Rotation,
};

use super::layout;
use crate::commitment::COMMIT_ARITY;
use crate::game::{CODE_LENGTH, COLOR_MAX, COLOR_MIN};

/// Largest value a per-color occurrence count can take.
const MAX_COUNT: u8 = CODE_LENGTH as u8;

/// Configuration for the scoring circuit
#[derive(Debug, Clone)]
pub struct MastermindConfig {
    /// Advice columns for computation: [a, b, output]
    advice: [Column<Advice>; 3],

    /// Instance column for public inputs/outputs
    instance: Column<Instance>,

    /// Selectors for operations
    s_add: Selector,
    s_sub: Selector,
    s_is_zero: Selector,
    s_digit: Selector,
    s_count: Selector,
    s_min: Selector,

    /// Poseidon permutation for the commitment checker
    poseidon: Pow5Config<Fp, 3, 2>,
}

impl MastermindConfig {
    /// Configure the circuit with necessary columns and gates
    pub fn configure(meta: &mut ConstraintSystem<Fp>) -> Self {
        // Advice columns for intermediate values: [a, b, output]
        let advice = [
            meta.advice_column(),
            meta.advice_column(),
            meta.advice_column(),
        ];

        for col in &advice {
            meta.enable_equality(*col);
        }

        // Instance column for public inputs/outputs
        let instance = meta.instance_column();
        meta.enable_equality(instance);

        // Dedicated columns for the Poseidon permutation. rc_b[0] doubles as
        // the global constants column (color values, subtracted constants).
        let state = [
            meta.advice_column(),
            meta.advice_column(),
            meta.advice_column(),
        ];
        let partial_sbox = meta.advice_column();
        let rc_a = [
            meta.fixed_column(),
            meta.fixed_column(),
            meta.fixed_column(),
        ];
        let rc_b = [
            meta.fixed_column(),
            meta.fixed_column(),
            meta.fixed_column(),
        ];
        meta.enable_constant(rc_b[0]);

        let poseidon = Pow5Chip::configure::<P128Pow5T3>(meta, state, partial_sbox, rc_a, rc_b);

        let s_add = meta.selector();
        let s_sub = meta.selector();
        let s_is_zero = meta.selector();
        let s_digit = meta.selector();
        let s_count = meta.selector();
        let s_min = meta.selector();

        meta.create_gate("add_gate", |meta| {
            let s = meta.query_selector(s_add);
            let a = meta.query_advice(advice[0], Rotation::cur());
            let b = meta.query_advice(advice[1], Rotation::cur());
            let c = meta.query_advice(advice[2], Rotation::cur());

            // Enforce: a + b = c
            vec![s * (a + b - c)]
        });

        meta.create_gate("sub_gate", |meta| {
            let s = meta.query_selector(s_sub);
            let a = meta.query_advice(advice[0], Rotation::cur());
            let b = meta.query_advice(advice[1], Rotation::cur());
            let c = meta.query_advice(advice[2], Rotation::cur());

            // Enforce: a - b = c
            vec![s * (a - b - c)]
        });

        meta.create_gate("is_zero_gate", |meta| {
            let s = meta.query_selector(s_is_zero);
            let x = meta.query_advice(advice[0], Rotation::cur());
            let x_inv = meta.query_advice(advice[1], Rotation::cur());
            let out = meta.query_advice(advice[2], Rotation::cur());
            let one = Expression::Constant(Fp::ONE);

            // out = 1 - x * x_inv, and x * out = 0. Together these force
            // out = 1 exactly when x = 0 and out = 0 otherwise.
            vec![
                s.clone() * (x.clone() * x_inv + out.clone() - one),
                s * (x * out),
            ]
        });

        meta.create_gate("digit_range_gate", |meta| {
            let s = meta.query_selector(s_digit);
            let x = meta.query_advice(advice[0], Rotation::cur());

            // (x - 1)(x - 2)...(x - 6) = 0: satisfied iff x is one of the
            // six allowed colors.
            let mut product = x.clone() - Expression::Constant(Fp::from(COLOR_MIN as u64));
            for v in (COLOR_MIN + 1)..=COLOR_MAX {
                product = product * (x.clone() - Expression::Constant(Fp::from(v as u64)));
            }
            vec![s * product]
        });

        meta.create_gate("count_range_gate", |meta| {
            let s = meta.query_selector(s_count);
            let x = meta.query_advice(advice[0], Rotation::cur());

            // x(x - 1)(x - 2)(x - 3)(x - 4) = 0: occurrence counts and their
            // differences stay in 0..=4.
            let mut product = x.clone();
            for k in 1..=MAX_COUNT {
                product = product * (x.clone() - Expression::Constant(Fp::from(k as u64)));
            }
            vec![s * product]
        });

        meta.create_gate("min_gate", |meta| {
            let s = meta.query_selector(s_min);
            let a = meta.query_advice(advice[0], Rotation::cur());
            let b = meta.query_advice(advice[1], Rotation::cur());
            let m = meta.query_advice(advice[2], Rotation::cur());

            // m equals one of its arguments; the accompanying count-range
            // checks on a - m and b - m pin it to the smaller one.
            vec![s * (m.clone() - a) * (m - b)]
        });

        Self {
            advice,
            instance,
            s_add,
            s_sub,
            s_is_zero,
            s_digit,
            s_count,
            s_min,
            poseidon,
        }
    }
}

/// Chip implementing the scoring operations
struct ScoreChip {
    config: MastermindConfig,
}

impl ScoreChip {
    fn new(config: MastermindConfig) -> Self {
        Self { config }
    }

    /// Assign a witness value to an advice cell
    fn assign_witness(
        &self,
        mut layouter: impl Layouter<Fp>,
        value: Value<Fp>,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        layouter.assign_region(
            || "witness",
            |mut region| region.assign_advice(|| "value", self.config.advice[0], 0, || value),
        )
    }

    /// Add two values
    fn add(
        &self,
        mut layouter: impl Layouter<Fp>,
        a: &AssignedCell<Fp, Fp>,
        b: &AssignedCell<Fp, Fp>,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        layouter.assign_region(
            || "add",
            |mut region| {
                self.config.s_add.enable(&mut region, 0)?;

                let a_val = a.copy_advice(|| "lhs", &mut region, self.config.advice[0], 0)?;
                let b_val = b.copy_advice(|| "rhs", &mut region, self.config.advice[1], 0)?;

                let c_val = a_val.value().copied() + b_val.value().copied();
                region.assign_advice(|| "output", self.config.advice[2], 0, || c_val)
            },
        )
    }

    /// Subtract b from a
    fn sub(
        &self,
        mut layouter: impl Layouter<Fp>,
        a: &AssignedCell<Fp, Fp>,
        b: &AssignedCell<Fp, Fp>,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        layouter.assign_region(
            || "sub",
            |mut region| {
                self.config.s_sub.enable(&mut region, 0)?;

                let a_val = a.copy_advice(|| "lhs", &mut region, self.config.advice[0], 0)?;
                let b_val = b.copy_advice(|| "rhs", &mut region, self.config.advice[1], 0)?;

                let c_val = a_val.value().copied() - b_val.value().copied();
                region.assign_advice(|| "output", self.config.advice[2], 0, || c_val)
            },
        )
    }

    /// Subtract a fixed constant from a value
    fn sub_const(
        &self,
        mut layouter: impl Layouter<Fp>,
        a: &AssignedCell<Fp, Fp>,
        constant: Fp,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        layouter.assign_region(
            || "sub_const",
            |mut region| {
                self.config.s_sub.enable(&mut region, 0)?;

                let a_val = a.copy_advice(|| "lhs", &mut region, self.config.advice[0], 0)?;
                region.assign_advice_from_constant(|| "rhs", self.config.advice[1], 0, constant)?;

                let c_val = a_val.value().copied() - Value::known(constant);
                region.assign_advice(|| "output", self.config.advice[2], 0, || c_val)
            },
        )
    }

    /// Equality-with-zero indicator: 1 if x == 0, else 0
    ///
    /// The inverse of x (or zero when x has none) is supplied as a witness
    /// hint; the gate constraints make the output honest either way.
    fn is_zero(
        &self,
        mut layouter: impl Layouter<Fp>,
        x: &AssignedCell<Fp, Fp>,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        layouter.assign_region(
            || "is_zero",
            |mut region| {
                self.config.s_is_zero.enable(&mut region, 0)?;

                let x_val = x.copy_advice(|| "x", &mut region, self.config.advice[0], 0)?;

                let inv_val = x_val
                    .value()
                    .copied()
                    .map(|v| v.invert().unwrap_or(Fp::ZERO));
                region.assign_advice(|| "x_inv", self.config.advice[1], 0, || inv_val)?;

                let out_val = x_val.value().copied().map(|v| {
                    if v.is_zero_vartime() {
                        Fp::ONE
                    } else {
                        Fp::ZERO
                    }
                });
                region.assign_advice(|| "out", self.config.advice[2], 0, || out_val)
            },
        )
    }

    /// Equality indicator: 1 if a == b, else 0
    fn is_equal(
        &self,
        mut layouter: impl Layouter<Fp>,
        a: &AssignedCell<Fp, Fp>,
        b: &AssignedCell<Fp, Fp>,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        let diff = self.sub(layouter.namespace(|| "diff"), a, b)?;
        self.is_zero(layouter.namespace(|| "diff_is_zero"), &diff)
    }

    /// Constrain a cell to the color domain [COLOR_MIN, COLOR_MAX]
    fn assert_digit(
        &self,
        mut layouter: impl Layouter<Fp>,
        x: &AssignedCell<Fp, Fp>,
    ) -> Result<(), Error> {
        layouter.assign_region(
            || "digit_range",
            |mut region| {
                self.config.s_digit.enable(&mut region, 0)?;
                x.copy_advice(|| "x", &mut region, self.config.advice[0], 0)?;
                Ok(())
            },
        )
    }

    /// Constrain a cell to the count range [0, CODE_LENGTH]
    fn assert_count(
        &self,
        mut layouter: impl Layouter<Fp>,
        x: &AssignedCell<Fp, Fp>,
    ) -> Result<(), Error> {
        layouter.assign_region(
            || "count_range",
            |mut region| {
                self.config.s_count.enable(&mut region, 0)?;
                x.copy_advice(|| "x", &mut region, self.config.advice[0], 0)?;
                Ok(())
            },
        )
    }

    /// Minimum of two occurrence counts
    ///
    /// The minimum is witnessed, then pinned by three constraints: it equals
    /// one of the arguments, and both `a - m` and `b - m` lie in the count
    /// range (so neither argument is below it).
    fn min(
        &self,
        mut layouter: impl Layouter<Fp>,
        a: &AssignedCell<Fp, Fp>,
        b: &AssignedCell<Fp, Fp>,
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        let m = layouter.assign_region(
            || "min",
            |mut region| {
                self.config.s_min.enable(&mut region, 0)?;

                let a_val = a.copy_advice(|| "a", &mut region, self.config.advice[0], 0)?;
                let b_val = b.copy_advice(|| "b", &mut region, self.config.advice[1], 0)?;

                let m_val = a_val.value().zip(b_val.value()).map(|(a, b)| {
                    if fp_to_u64(a) <= fp_to_u64(b) {
                        *a
                    } else {
                        *b
                    }
                });
                region.assign_advice(|| "min", self.config.advice[2], 0, || m_val)
            },
        )?;

        let a_excess = self.sub(layouter.namespace(|| "a_minus_min"), a, &m)?;
        self.assert_count(layouter.namespace(|| "a_excess_range"), &a_excess)?;
        let b_excess = self.sub(layouter.namespace(|| "b_minus_min"), b, &m)?;
        self.assert_count(layouter.namespace(|| "b_excess_range"), &b_excess)?;

        Ok(m)
    }

    /// Sum a non-empty list of cells with chained add gates
    fn sum(
        &self,
        mut layouter: impl Layouter<Fp>,
        terms: &[AssignedCell<Fp, Fp>],
    ) -> Result<AssignedCell<Fp, Fp>, Error> {
        let mut acc = terms[0].clone();
        for term in &terms[1..] {
            acc = self.add(layouter.namespace(|| "sum_term"), &acc, term)?;
        }
        Ok(acc)
    }
}

/// The full scoring circuit for one round
///
/// # Example
///
/// ```ignore
/// let salt = Fp::from(42);
/// let circuit = MastermindCircuit::new([3, 5, 4, 6], [4, 5, 6, 3], salt);
/// let public = PublicInputs::new([3, 5, 4, 6], Score { hits: 1, blows: 3 }, 18, commitment);
/// MockProver::run(K, &circuit, vec![public.to_instance()])?.assert_satisfied();
/// ```
#[derive(Clone)]
pub struct MastermindCircuit {
    /// The public guess, duplicated into the witness and bound to the
    /// instance column during synthesis.
    guess: [Value<Fp>; CODE_LENGTH],

    /// The secret solution elements.
    solution: [Value<Fp>; CODE_LENGTH],

    /// The secret salt bound into the commitment. Any field element; never
    /// range-checked.
    salt: Value<Fp>,
}

impl MastermindCircuit {
    /// Build the circuit for one (guess, solution, salt) witness.
    pub fn new(guess: [u8; CODE_LENGTH], solution: [u8; CODE_LENGTH], salt: Fp) -> Self {
        Self {
            guess: guess.map(|v| Value::known(Fp::from(v as u64))),
            solution: solution.map(|v| Value::known(Fp::from(v as u64))),
            salt: Value::known(salt),
        }
    }
}

impl Default for MastermindCircuit {
    fn default() -> Self {
        Self {
            guess: [Value::unknown(); CODE_LENGTH],
            solution: [Value::unknown(); CODE_LENGTH],
            salt: Value::unknown(),
        }
    }
}

impl PlonkCircuit<Fp> for MastermindCircuit {
    type Config = MastermindConfig;
    type FloorPlanner = SimpleFloorPlanner;

    fn without_witnesses(&self) -> Self {
        Self::default()
    }

    fn configure(meta: &mut ConstraintSystem<Fp>) -> Self::Config {
        MastermindConfig::configure(meta)
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<Fp>,
    ) -> Result<(), Error> {
        let chip = ScoreChip::new(config.clone());

        // Load the eight code elements and the salt.
        let mut guess = Vec::with_capacity(CODE_LENGTH);
        for (i, value) in self.guess.iter().enumerate() {
            let cell =
                chip.assign_witness(layouter.namespace(|| format!("guess_{}", i)), *value)?;
            // The guess is public: tie each element to its instance row.
            layouter.constrain_instance(cell.cell(), config.instance, layout::ROW_GUESS + i)?;
            guess.push(cell);
        }

        let mut solution = Vec::with_capacity(CODE_LENGTH);
        for (i, value) in self.solution.iter().enumerate() {
            let cell = chip.assign_witness(layouter.namespace(|| format!("soln_{}", i)), *value)?;
            solution.push(cell);
        }

        let salt = chip.assign_witness(layouter.namespace(|| "salt"), self.salt)?;

        // Range validator: every guess and solution element is a valid color.
        for (i, cell) in guess.iter().chain(solution.iter()).enumerate() {
            chip.assert_digit(layouter.namespace(|| format!("range_{}", i)), cell)?;
        }

        // Sum checker: the guess total must equal the declared solution sum.
        let guess_sum = chip.sum(layouter.namespace(|| "guess_sum"), &guess)?;
        layouter.constrain_instance(guess_sum.cell(), config.instance, layout::ROW_SOLN_SUM)?;

        // Match engine, hits: positional equality down the diagonal.
        let mut hit_terms = Vec::with_capacity(CODE_LENGTH);
        for i in 0..CODE_LENGTH {
            let eq = chip.is_equal(
                layouter.namespace(|| format!("hit_{}", i)),
                &guess[i],
                &solution[i],
            )?;
            hit_terms.push(eq);
        }
        let hits = chip.sum(layouter.namespace(|| "hits"), &hit_terms)?;
        layouter.constrain_instance(hits.cell(), config.instance, layout::ROW_NUM_HIT)?;

        // Match engine, totals: per color, count occurrences on both sides
        // and take the smaller count. Summed over the domain this is the
        // multiset intersection size, so repeated colors are never counted
        // twice.
        let mut match_terms = Vec::with_capacity(COLOR_MAX as usize);
        for color in COLOR_MIN..=COLOR_MAX {
            let color_fp = Fp::from(color as u64);

            let mut guess_ind = Vec::with_capacity(CODE_LENGTH);
            for (i, cell) in guess.iter().enumerate() {
                let diff = chip.sub_const(
                    layouter.namespace(|| format!("g{}_minus_{}", i, color)),
                    cell,
                    color_fp,
                )?;
                guess_ind.push(chip.is_zero(
                    layouter.namespace(|| format!("g{}_is_{}", i, color)),
                    &diff,
                )?);
            }
            let guess_count = chip.sum(
                layouter.namespace(|| format!("guess_count_{}", color)),
                &guess_ind,
            )?;

            let mut soln_ind = Vec::with_capacity(CODE_LENGTH);
            for (i, cell) in solution.iter().enumerate() {
                let diff = chip.sub_const(
                    layouter.namespace(|| format!("s{}_minus_{}", i, color)),
                    cell,
                    color_fp,
                )?;
                soln_ind.push(chip.is_zero(
                    layouter.namespace(|| format!("s{}_is_{}", i, color)),
                    &diff,
                )?);
            }
            let soln_count = chip.sum(
                layouter.namespace(|| format!("soln_count_{}", color)),
                &soln_ind,
            )?;

            let matched = chip.min(
                layouter.namespace(|| format!("matched_{}", color)),
                &guess_count,
                &soln_count,
            )?;
            match_terms.push(matched);
        }
        let total_matches = chip.sum(layouter.namespace(|| "total_matches"), &match_terms)?;

        // Blows are whatever of the total is not a hit.
        let blows = chip.sub(layouter.namespace(|| "blows"), &total_matches, &hits)?;
        layouter.constrain_instance(blows.cell(), config.instance, layout::ROW_NUM_BLOW)?;

        // Commitment checker: recompute Poseidon(salt, solution) in-circuit.
        let poseidon_chip = Pow5Chip::construct(config.poseidon.clone());
        let hasher = PoseidonHash::<
            Fp,
            Pow5Chip<Fp, 3, 2>,
            P128Pow5T3,
            ConstantLength<COMMIT_ARITY>,
            3,
            2,
        >::init(poseidon_chip, layouter.namespace(|| "poseidon_init"))?;

        let message = [
            salt,
            solution[0].clone(),
            solution[1].clone(),
            solution[2].clone(),
            solution[3].clone(),
        ];
        let recomputed = hasher.hash(layouter.namespace(|| "poseidon_hash"), message)?;

        // Public output binder: the recomputed commitment must equal the
        // published one, and is additionally exposed on its own output row.
        layouter.constrain_instance(recomputed.cell(), config.instance, layout::ROW_SOLN_HASH)?;
        layouter.constrain_instance(recomputed.cell(), config.instance, layout::ROW_HASH_OUT)?;

        Ok(())
    }
}

/// Read a small field element back as a u64 (low limb of the repr).
fn fp_to_u64(f: &Fp) -> u64 {
    let bytes = f.to_repr();
    let mut value = 0u64;
    for i in 0..8 {
        value |= (bytes.as_ref()[i] as u64) << (i * 8);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::layout::{PublicInputs, K, ROW_HASH_OUT, ROW_NUM_BLOW, ROW_NUM_HIT};
    use crate::commitment::commit;
    use crate::game::{code_sum, score};
    use halo2_proofs::dev::MockProver;

    fn mock_prove(
        guess: [u8; CODE_LENGTH],
        solution: [u8; CODE_LENGTH],
        salt: u64,
        public: &PublicInputs,
    ) -> MockProver<Fp> {
        let circuit = MastermindCircuit::new(guess, solution, Fp::from(salt));
        MockProver::run(K, &circuit, vec![public.to_instance()]).expect("synthesis failed")
    }

    /// Public inputs as an honest prover would declare them.
    fn honest_public(
        guess: [u8; CODE_LENGTH],
        solution: [u8; CODE_LENGTH],
        salt: u64,
    ) -> PublicInputs {
        PublicInputs::new(
            guess,
            score(&guess, &solution),
            code_sum(&solution),
            commit(Fp::from(salt), &solution),
        )
    }

    #[test]
    fn proves_the_correct_solution() {
        let solution = [1, 2, 3, 4];
        let public = honest_public(solution, solution, 42);
        assert_eq!((public.num_hit, public.num_blow), (4, 0));

        mock_prove(solution, solution, 42, &public).assert_satisfied();
    }

    #[test]
    fn scores_hits_and_blows_for_a_valid_guess() {
        let guess = [3, 5, 4, 6];
        let solution = [4, 5, 6, 3];
        let public = honest_public(guess, solution, 42);
        assert_eq!((public.num_hit, public.num_blow), (1, 3));

        mock_prove(guess, solution, 42, &public).assert_satisfied();
    }

    #[test]
    fn repeated_colors_match_the_oracle() {
        let cases = [
            ([1, 1, 2, 2], [1, 2, 1, 1]),
            ([1, 3, 3, 3], [2, 1, 1, 1]),
            ([6, 6, 6, 6], [6, 6, 6, 6]),
            ([2, 2, 3, 3], [3, 3, 2, 2]),
        ];
        for (guess, solution) in cases {
            let public = honest_public(guess, solution, 7);
            mock_prove(guess, solution, 7, &public).assert_satisfied();
        }
    }

    #[test]
    fn rejects_wrong_guess_sum() {
        let solution = [1, 2, 3, 4];
        // Guess sums to 14; the declared solution sum is 10.
        let guess = [2, 3, 4, 5];
        let public = honest_public(guess, solution, 42);
        assert_ne!(code_sum(&guess), public.soln_sum);

        // Even with the true hit/blow declaration the witness is rejected.
        let prover = mock_prove(guess, solution, 42, &public);
        assert!(prover.verify().is_err());
    }

    #[test]
    fn rejects_out_of_range_guess_element() {
        let solution = [6, 2, 3, 5];
        let guess = [7, 1, 3, 5];
        let public = honest_public(guess, solution, 42);

        let prover = mock_prove(guess, solution, 42, &public);
        assert!(prover.verify().is_err());
    }

    #[test]
    fn rejects_out_of_range_solution_element() {
        let solution = [0, 2, 3, 5];
        let guess = [1, 2, 3, 5];
        let public = honest_public(guess, solution, 42);

        let prover = mock_prove(guess, solution, 42, &public);
        assert!(prover.verify().is_err());
    }

    #[test]
    fn rejects_overstated_hit_count() {
        let guess = [3, 5, 4, 6];
        let solution = [4, 5, 6, 3];
        let mut public = honest_public(guess, solution, 42);
        public.num_hit += 1;

        let prover = mock_prove(guess, solution, 42, &public);
        assert!(prover.verify().is_err());
    }

    #[test]
    fn rejects_understated_blow_count() {
        let guess = [3, 5, 4, 6];
        let solution = [4, 5, 6, 3];
        let mut public = honest_public(guess, solution, 42);
        public.num_blow -= 1;

        let prover = mock_prove(guess, solution, 42, &public);
        assert!(prover.verify().is_err());
    }

    #[test]
    fn rejects_a_swapped_in_solution() {
        // The prover tries to score against a different solution than the
        // committed one; the commitment checker rejects the witness.
        let guess = [1, 2, 3, 4];
        let committed = [4, 5, 6, 3];
        let convenient = [1, 2, 3, 4];

        let public = PublicInputs::new(
            guess,
            score(&guess, &convenient),
            code_sum(&convenient),
            commit(Fp::from(42), &committed),
        );
        let prover = mock_prove(guess, convenient, 42, &public);
        assert!(prover.verify().is_err());
    }

    #[test]
    fn output_row_must_carry_the_recomputed_commitment() {
        let solution = [1, 2, 3, 4];
        let public = honest_public(solution, solution, 42);

        let mut instance = public.to_instance();
        instance[ROW_HASH_OUT] += Fp::ONE;

        let circuit = MastermindCircuit::new(solution, solution, Fp::from(42));
        let prover = MockProver::run(K, &circuit, vec![instance]).expect("synthesis failed");
        assert!(prover.verify().is_err());
    }

    #[test]
    fn hit_and_blow_rows_bind_to_computed_values() {
        // Mutating either declared count directly in the instance vector
        // must break the copy constraint to the computed cell.
        let guess = [3, 5, 4, 6];
        let solution = [4, 5, 6, 3];
        let public = honest_public(guess, solution, 42);

        for row in [ROW_NUM_HIT, ROW_NUM_BLOW] {
            let mut instance = public.to_instance();
            instance[row] += Fp::ONE;
            let circuit = MastermindCircuit::new(guess, solution, Fp::from(42));
            let prover = MockProver::run(K, &circuit, vec![instance]).expect("synthesis failed");
            assert!(prover.verify().is_err());
        }
    }

    #[test]
    fn totals_stay_within_code_length() {
        // hits + blows <= 4 for every accepted witness; spot-check heavy
        // repetition cases where naive pairwise counting would overshoot.
        let cases: [([u8; 4], [u8; 4]); 3] = [
            ([1, 1, 1, 1], [1, 1, 1, 2]),
            ([5, 5, 6, 6], [6, 6, 5, 5]),
            ([2, 2, 2, 3], [2, 3, 3, 3]),
        ];
        for (guess, solution) in cases {
            let s = score(&guess, &solution);
            assert!(s.total() <= CODE_LENGTH as u8);
            let public = honest_public(guess, solution, 13);
            mock_prove(guess, solution, 13, &public).assert_satisfied();
        }
    }
}
