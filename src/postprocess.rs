/// Numerically stable softmax: the largest logit is subtracted before
/// exponentiating so large scores cannot overflow. Infinite maxima share the
/// probability mass evenly; all `-inf` input is treated as uniform.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    if max.is_infinite() {
        let winners = logits.iter().filter(|&&x| x == max).count() as f32;
        return logits
            .iter()
            .map(|&x| if x == max { 1.0 / winners } else { 0.0 })
            .collect();
    }

    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// Indices of the `k` largest values, highest first. Equal values keep
/// ascending index order. Returns every index when `k` exceeds the length.
pub fn top_k(values: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    // stable sort, so ties stay in index order
    indices.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    indices.truncate(k);
    indices
}
