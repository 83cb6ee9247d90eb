use{
    std::cmp::Reverse,
    super::*,
    crate::misc_types::*,
};

/// The k nodes with the most contacts, degree descending. Ties are broken
/// by ascending node index so the selection is reproducible.
pub fn top_spreaders(graph: &ContactGraph, k: usize) -> Result<Vec<usize>, SimError>
{
    let n = graph.vertex_count();
    if n == 0 {
        return Err(SimError::SeedUnavailable);
    }
    if k == 0 || k > n {
        return Err(
            SimError::InvalidArgument(
                format!("spreader count {k} outside 1..={n}")
            )
        );
    }

    let mut by_degree: Vec<usize> = (0..n).collect();
    by_degree.sort_by_key(
        |&index|
        (Reverse(graph.degree(index).unwrap_or(0)), index)
    );
    by_degree.truncate(k);
    Ok(by_degree)
}

#[cfg(test)]
mod testing
{
    use super::*;

    fn star_graph(leaves: usize) -> ContactGraph
    {
        // node 0 in the middle
        let mut graph = ContactGraph::new(leaves + 1);
        for leaf in 1..=leaves{
            graph.add_edge(0, leaf).unwrap();
        }
        graph
    }

    #[test]
    fn hub_first()
    {
        let graph = star_graph(6);
        let spreaders = top_spreaders(&graph, 3).unwrap();
        assert_eq!(spreaders[0], 0);
        // the leaves all have degree 1, ties resolve by index
        assert_eq!(spreaders[1..], [1, 2]);
    }

    #[test]
    fn tie_break_is_ascending()
    {
        // no edges at all: every node has degree 0
        let graph = ContactGraph::new(5);
        let spreaders = top_spreaders(&graph, 5).unwrap();
        assert_eq!(spreaders, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rejects_bad_counts()
    {
        let graph = star_graph(3);
        assert!(top_spreaders(&graph, 0).is_err());
        assert!(top_spreaders(&graph, 5).is_err());
        assert!(top_spreaders(&graph, 4).is_ok());
    }

    #[test]
    fn empty_graph_has_no_seed()
    {
        let graph = ContactGraph::new(0);
        assert_eq!(top_spreaders(&graph, 1), Err(SimError::SeedUnavailable));
    }
}
