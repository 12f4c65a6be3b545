//! Helper algorithms over [`Graph`].
//!
//! Traversals are iterative and visit neighbors in ascending insertion index, so results
//! depend only on how the graph was built and long chains cannot exhaust the call stack.

use super::Graph;

/// Strongly connected components that contain a cycle: SCCs with more than one node, plus
/// single nodes with a self-loop.
///
/// Members of each cycle are listed in insertion order and the cycles are sorted by their
/// first member's insertion index.
pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default,
    E: Default,
    G: Default,
{
    let sccs = tarjan_sccs(g);

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    for mut scc in sccs {
        if scc.len() > 1 {
            scc.sort_unstable();
            cycles.push(scc);
        } else if scc
            .first()
            .is_some_and(|&v_ix| g.successor_ixs(v_ix).contains(&v_ix))
        {
            cycles.push(scc);
        }
    }
    cycles.sort_by_key(|c| c.first().copied());

    cycles
        .into_iter()
        .map(|c| {
            c.into_iter()
                .filter_map(|ix| g.node_id_by_ix(ix).map(str::to_string))
                .collect()
        })
        .collect()
}

fn tarjan_sccs<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<usize>>
where
    N: Default,
    E: Default,
    G: Default,
{
    let n = g.node_count();
    let mut index: usize = 0;
    let mut indices: Vec<Option<usize>> = vec![None; n];
    let mut lowlink: Vec<usize> = vec![0; n];
    let mut on_stack = vec![false; n];
    let mut scc_stack: Vec<usize> = Vec::new();
    let mut sccs: Vec<Vec<usize>> = Vec::new();

    for root in 0..n {
        if indices[root].is_some() {
            continue;
        }

        // Explicit call stack: (node, its successors, next successor to visit).
        let mut call: Vec<(usize, Vec<usize>, usize)> = Vec::new();
        indices[root] = Some(index);
        lowlink[root] = index;
        index += 1;
        scc_stack.push(root);
        on_stack[root] = true;
        call.push((root, g.successor_ixs(root), 0));

        while let Some((v, succ, cursor)) = call.last_mut() {
            let v = *v;
            if let Some(&w) = succ.get(*cursor) {
                *cursor += 1;
                match indices[w] {
                    None => {
                        indices[w] = Some(index);
                        lowlink[w] = index;
                        index += 1;
                        scc_stack.push(w);
                        on_stack[w] = true;
                        call.push((w, g.successor_ixs(w), 0));
                    }
                    Some(w_idx) if on_stack[w] => {
                        lowlink[v] = lowlink[v].min(w_idx);
                    }
                    Some(_) => {}
                }
                continue;
            }

            call.pop();
            if let Some((parent, _, _)) = call.last() {
                lowlink[*parent] = lowlink[*parent].min(lowlink[v]);
            }

            if Some(lowlink[v]) == indices[v] {
                let mut scc: Vec<usize> = Vec::new();
                while let Some(w) = scc_stack.pop() {
                    on_stack[w] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                sccs.push(scc);
            }
        }
    }

    sccs
}
