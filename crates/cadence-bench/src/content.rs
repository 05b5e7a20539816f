use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rows regenerated per refresh unless configured otherwise.
pub const DEFAULT_ROWS: usize = 50;

/// One generated route-assignment row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BenchRow {
    pub index: u32,
    pub route: u32,
    pub max: u32,
    pub value: u32,
}

impl BenchRow {
    /// Appends this row's markup to `out`.
    pub fn write_markup(&self, out: &mut String) {
        out.push_str(&format!(
            r#"
<div class="row">
    <div class="col col1"><button class="expand" index="{index}">+</button>&nbsp;<a>Route {route}</a></div>
    <div class="col col23"><input type="range" class="assign_range" min="0" max="{max}" value="{value}"/></div>
    <div class="col col4">Assigned</div>
    <select>
        <option>Red</option><option>Blue</option><option selected>Green</option><option style="background-color: yellow;">Yellow</option>
    </select>
    <div class="inrow unmark_collapse">
        <div class="col col123 assign_text">Assign to route</div>
        <div class="col col4">
            <input type="submit" class="vehicle_depot_assign_confirm" quantity="0">Confirm</input>
        </div>
    </div>
</div>"#,
            index = self.index,
            route = self.route,
            max = self.max,
            value = self.value,
        ));
    }
}

/// Produces fresh random rows for the document's dynamic region.
#[derive(Debug, Clone)]
pub struct RowGenerator {
    rng: StdRng,
    rows: usize,
}

impl RowGenerator {
    /// Reproducible generator.
    pub fn seeded(seed: u64, rows: usize) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), rows }
    }

    pub fn from_entropy(rows: usize) -> Self {
        Self { rng: StdRng::from_entropy(), rows }
    }

    pub fn next_row(&mut self) -> BenchRow {
        let index = self.rng.gen_range(0..1000);
        let route = self.rng.gen_range(0..50);
        let max = self.rng.gen_range(10..50);
        let value = self.rng.gen_range(0..max);
        BenchRow { index, route, max, value }
    }

    pub fn generate(&mut self) -> Vec<BenchRow> {
        (0..self.rows).map(|_| self.next_row()).collect()
    }
}

/// Markup for a whole set of rows.
pub fn rows_markup(rows: &[BenchRow]) -> String {
    let mut out = String::with_capacity(rows.len() * 900);
    for row in rows {
        row.write_markup(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let a = RowGenerator::seeded(7, 50).generate();
        let b = RowGenerator::seeded(7, 50).generate();
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_batches_differ() {
        let mut g = RowGenerator::seeded(1, 20);
        assert_ne!(g.generate(), g.generate());
    }

    #[test]
    fn values_stay_in_range() {
        let mut g = RowGenerator::seeded(42, 500);
        for row in g.generate() {
            assert!(row.index < 1000);
            assert!(row.route < 50);
            assert!((10..50).contains(&row.max));
            assert!(row.value < row.max);
        }
    }

    #[test]
    fn markup_carries_row_fields() {
        let row = BenchRow { index: 12, route: 3, max: 40, value: 9 };
        let markup = rows_markup(&[row, row]);
        assert_eq!(markup.matches(r#"<div class="row">"#).count(), 2);
        assert!(markup.contains(r#"index="12""#));
        assert!(markup.contains("<a>Route 3</a>"));
        assert!(markup.contains(r#"max="40" value="9""#));
    }

    #[test]
    fn zero_rows_is_empty() {
        assert!(rows_markup(&RowGenerator::seeded(0, 0).generate()).is_empty());
    }
}
