use eyre::Result;

use rangedict_collections_rs::range_dict::{RangeDict, Selector, Slice};

fn dictionary() -> Result<RangeDict<&'static str, &'static str>> {
    Ok(RangeDict::new(10, [("a", "alpha"), ("b", "bravo")])?)
}

#[test]
fn full() -> Result<()> {
    let rd = dictionary()?;
    assert_eq!(rd.ids(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(rd.view().ids(), rd.ids());
    assert_eq!(rd.len(), 10);
    Ok(())
}

#[test]
fn single() -> Result<()> {
    let rd = dictionary()?;
    assert_eq!(rd.index(Selector::Index(2))?.ids(), [2]);
    assert_eq!(rd.index(Selector::Index(-1))?.ids(), [9]);
    Ok(())
}

#[test]
fn simple_slice() -> Result<()> {
    let rd = dictionary()?;
    assert_eq!(rd.index(Selector::range(2, 6))?.ids(), [2, 3, 4, 5]);
    Ok(())
}

#[test]
fn extended_slice() -> Result<()> {
    let rd = dictionary()?;
    assert_eq!(rd.index(Selector::stepped(2, 8, 2))?.ids(), [2, 4, 6]);
    Ok(())
}

#[test]
fn tuple() -> Result<()> {
    let rd = dictionary()?;
    assert_eq!(rd.index(Selector::positions([2, 4, 7]))?.ids(), [2, 4, 7]);
    Ok(())
}

#[test]
fn unsorted_tuple() -> Result<()> {
    let rd = dictionary()?;
    assert_eq!(rd.index(Selector::positions([2, 7, 3]))?.ids(), [2, 3, 7]);
    Ok(())
}

#[test]
fn list() -> Result<()> {
    let rd = dictionary()?;
    let positions: Vec<isize> = vec![2, 7, 3];
    assert_eq!(rd.index(positions)?.ids(), [2, 3, 7]);
    Ok(())
}

#[test]
fn double_slice() -> Result<()> {
    let rd = dictionary()?;
    let view1 = rd.index(Selector::range(2, 7))?;
    assert_eq!(view1.ids(), [2, 3, 4, 5, 6]);
    let view2 = view1.index(Selector::range(2, 4))?;
    assert_eq!(view2.ids(), [4, 5]);
    Ok(())
}

#[test]
fn double_list() -> Result<()> {
    let rd = dictionary()?;
    let view1 = rd.index(vec![2isize, 7, 1, 3, 5, 8])?;
    assert_eq!(view1.ids(), [1, 2, 3, 5, 7, 8]);
    let view2 = view1.index(Selector::positions([2, 3, 5]))?;
    assert_eq!(view2.ids(), [3, 5, 8]);
    Ok(())
}

#[test]
fn reversed_slice_is_ascending() -> Result<()> {
    let rd = dictionary()?;
    let view = rd.index(Slice::new(Some(8), Some(1), -3))?;
    assert_eq!(view.ids(), [2, 5, 8]);
    Ok(())
}

#[test]
fn empty_views() -> Result<()> {
    let rd = dictionary()?;
    let empty = rd.index(Selector::range(6, 2))?;
    assert!(empty.is_empty());
    assert_eq!(empty.get("a")?, Vec::<&str>::new());

    // Writing nothing is not an error and changes nothing
    empty.set("a", "zulu")?;
    assert_eq!(rd.runs_count("a")?, 1);

    let nested = empty.index(Selector::range(0, 3))?;
    assert!(nested.is_empty());
    assert!(empty.index(Selector::Index(0)).is_err());
    Ok(())
}

#[test]
fn deep_nesting_writes_through() -> Result<()> {
    let rd = dictionary()?;
    let level1 = rd.index(Selector::stepped(1, 10, 2))?; // [1, 3, 5, 7, 9]
    let level2 = level1.index(Selector::positions([-1, 0, 2]))?; // [1, 5, 9]
    let level3 = level2.index(Selector::range(1, 3))?; // [5, 9]
    assert_eq!(level3.ids(), [5, 9]);

    level3.set("b", "sierra")?;
    assert_eq!(
        rd.view().get("b")?,
        vec![
            "bravo", "bravo", "bravo", "bravo", "bravo", "sierra", "bravo", "bravo", "bravo",
            "sierra"
        ]
    );
    assert_eq!(level1.get("b")?, vec!["bravo", "bravo", "sierra", "bravo", "sierra"]);
    assert_eq!(rd.get("a", 5)?, "alpha");
    Ok(())
}

#[test]
fn positional_composition_law() -> Result<()> {
    let rd = dictionary()?;
    let view = rd.index(Selector::positions([9, 0, 4, 6, 2]))?;
    let positions = [3, -1, 0, 3, 1];

    let mut expected = positions
        .iter()
        .map(|&x| view.ids()[if x < 0 { (view.len() as isize + x) as usize } else { x as usize }])
        .collect::<Vec<_>>();
    expected.sort_unstable();
    expected.dedup();

    assert_eq!(view.index(Selector::positions(positions))?.ids(), expected);
    Ok(())
}
