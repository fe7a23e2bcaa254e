mod seq_list;
use seq_list::{List, ListError};

fn main() -> Result<(), ListError> {
    let mut list = List::new();

    list.push_back(1)?;
    list.push_back(2)?;
    list.push_back(3)?;
    println!("{}", list);

    list.push_front(0)?;
    println!("{}", list);

    list.pop_back();
    println!("{}", list);
    println!("len: {}", list.len());

    Ok(())
}
