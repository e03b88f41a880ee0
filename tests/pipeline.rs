use delta_lineage::{
    analyze_cell, analyze_chamber, AnalysisConfig, AnalysisError, Cell, Chamber, FamilyRecord,
};

fn rec(cell_nb: u32, mother_nb: u32) -> FamilyRecord {
    FamilyRecord { cell_nb, mother_nb }
}

fn make_cell(cell_number: u32, daughters: Vec<u32>, family_tree: Vec<FamilyRecord>) -> Cell {
    let n = daughters.len();
    let framenbs: Vec<u32> = (1..=n as u32).collect();
    let length: Vec<f64> = (0..n).map(|i| 2.0 + 0.5 * i as f64).collect();
    let width: Vec<f64> = (0..n).map(|i| 1.0 + 0.1 * i as f64).collect();
    let area: Vec<f64> = (0..n).map(|i| 3.0 + i as f64).collect();
    let fluorescence: Vec<f64> = (0..n).map(|i| 10.0 + 2.0 * i as f64).collect();
    Cell::new(
        cell_number,
        cell_number,
        2,
        3,
        framenbs,
        daughters,
        length,
        width,
        area,
        fluorescence,
        family_tree,
    )
    .unwrap()
}

#[test]
fn analyze_cell_runs_derivations_before_segmentation() {
    let mut cell = make_cell(
        5,
        vec![0, 0, 6, 0, 0],
        vec![rec(5, 2), rec(2, 1), rec(1, 0)],
    );
    analyze_cell(&mut cell, &AnalysisConfig::default()).unwrap();

    assert!(cell.fluorescence_by_area.is_some());
    assert!(cell.length_growth.is_some());
    assert!(cell.width_growth.is_some());
    assert!(cell.area_growth.is_some());
    assert!(cell.fluorescence_growth.is_some());
    assert!(cell.fluorescence_growth_by_area.is_some());
    assert_eq!(cell.ancestry.as_deref(), Some(&[2, 1][..]));
    assert_eq!(cell.subcells.len(), 2);
}

#[test]
fn analyze_chamber_covers_every_cell() {
    let cells = vec![
        make_cell(5, vec![0, 0, 6, 0], vec![rec(5, 2), rec(2, 0)]),
        make_cell(6, vec![0, 7, 0, 8], vec![rec(6, 0)]),
    ];
    let mut chamber = Chamber::new(3, cells);
    analyze_chamber(&mut chamber, &AnalysisConfig::default()).unwrap();

    assert_eq!(chamber.cells[0].subcells.len(), 2);
    assert_eq!(chamber.cells[1].subcells.len(), 3);
    assert_eq!(chamber.cells[0].ancestry.as_deref(), Some(&[2][..]));
    assert_eq!(chamber.cells[1].ancestry.as_deref(), Some(&[][..]));
}

#[test]
fn broken_lineage_stops_the_chamber_run() {
    let cells = vec![
        make_cell(5, vec![0, 0], vec![rec(5, 0)]),
        // 9 never appears as a cell_nb of its own.
        make_cell(6, vec![0, 0], vec![rec(6, 9)]),
    ];
    let mut chamber = Chamber::new(3, cells);
    let err = analyze_chamber(&mut chamber, &AnalysisConfig::default()).unwrap_err();

    let analysis_err = err
        .downcast_ref::<AnalysisError>()
        .expect("typed error should survive the pipeline");
    assert_eq!(*analysis_err, AnalysisError::LookupFailure { cell_nb: 9 });

    // The first cell finished; the failing one never reached segmentation.
    assert_eq!(chamber.cells[0].subcells.len(), 1);
    assert!(chamber.cells[1].subcells.is_empty());
}

#[test]
fn custom_interval_scales_growth_everywhere() {
    let mut cell = make_cell(5, vec![0, 0, 0], vec![rec(5, 0)]);
    let config = AnalysisConfig {
        time_interval_per_frame: 1.0,
    };
    analyze_cell(&mut cell, &config).unwrap();
    let growth = cell.length_growth.as_ref().unwrap();
    assert!((growth[0] - 0.5).abs() < 1e-9);
    assert_eq!(cell.subcells[0].length_growth.len(), 2);
}
