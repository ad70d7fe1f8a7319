use std::collections::HashMap;

use crate::foundation::math::Rng64;

/// A populated cell and the image drawn in it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TileSlot {
    /// Row-major cell index.
    pub cell: usize,
    /// Image reference from the config.
    pub image: String,
}

/// Pick `min(k, total)` distinct cell indices uniformly from `0..total`.
///
/// Partial Fisher-Yates over a sparse swap map, so the cost is `O(k)` whatever `total` is. The
/// result is in selection order, and a given seed always yields the same cells.
pub fn select_cells(k: usize, total: usize, rng: &mut Rng64) -> Vec<usize> {
    let k = k.min(total);
    // Slot -> value for every slot a swap has touched; untouched slots hold their own index.
    let mut swapped: HashMap<usize, usize> = HashMap::with_capacity(k);
    let mut cells = Vec::with_capacity(k);
    for i in 0..k {
        let j = i + rng.next_below((total - i) as u64) as usize;
        let at_i = swapped.get(&i).copied().unwrap_or(i);
        let at_j = swapped.get(&j).copied().unwrap_or(j);
        swapped.insert(j, at_i);
        cells.push(at_j);
    }
    cells
}

/// Pair selected cells with images, cycling the image list by selection order.
///
/// An empty image list produces no tiles.
pub fn assign_tiles(cells: &[usize], images: &[String]) -> Vec<TileSlot> {
    if images.is_empty() {
        return Vec::new();
    }
    cells
        .iter()
        .enumerate()
        .map(|(i, &cell)| TileSlot {
            cell,
            image: images[i % images.len()].clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/grid/selection.rs"]
mod tests;
