/// Seed used when no board file is supplied: a small five-cell cluster in
/// the middle of the board plus a lone cell in the bottom-right corner.
pub const DEFAULT_SEED: [(usize, usize); 6] = [(5, 4), (5, 5), (6, 5), (5, 6), (6, 6), (9, 9)];
