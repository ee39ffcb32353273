use ferrous_resolv_domain::SrvRecord;

/// Orders SRV records for use as in RFC 2782.
///
/// Records are grouped by ascending priority. Within a priority the
/// nonzero-weight records come out as a weighted random permutation, each
/// pick proportional to the remaining weights, followed by the zero-weight
/// records in uniformly random order.
pub fn order_srv_records(mut records: Vec<SrvRecord>, rng: &mut fastrand::Rng) -> Vec<SrvRecord> {
    records.sort_by_key(|record| record.priority);

    let mut ordered = Vec::with_capacity(records.len());
    let mut group = Vec::new();
    let mut current_priority = None;

    for record in records {
        if current_priority != Some(record.priority) {
            ordered.extend(reorder_by_weight(std::mem::take(&mut group), rng));
            current_priority = Some(record.priority);
        }
        group.push(record);
    }
    ordered.extend(reorder_by_weight(group, rng));

    ordered
}

fn reorder_by_weight(group: Vec<SrvRecord>, rng: &mut fastrand::Rng) -> Vec<SrvRecord> {
    let (mut weighted, mut unweighted): (Vec<_>, Vec<_>) =
        group.into_iter().partition(|record| record.weight > 0);

    let mut ordered = Vec::with_capacity(weighted.len() + unweighted.len());
    let mut weight_sum: u32 = weighted.iter().map(|r| u32::from(r.weight)).sum();

    while !weighted.is_empty() {
        let pick = rng.u32(1..=weight_sum);
        let mut running = 0u32;
        let index = weighted
            .iter()
            .position(|record| {
                running += u32::from(record.weight);
                running >= pick
            })
            .unwrap_or(weighted.len() - 1);

        let chosen = weighted.remove(index);
        weight_sum -= u32::from(chosen.weight);
        ordered.push(chosen);
    }

    rng.shuffle(&mut unweighted);
    ordered.extend(unweighted);
    ordered
}
