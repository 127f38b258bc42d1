use super::DisplayError;
use std::fs;
use std::str::FromStr;

/// Comma separated pack sizes, `250,500,1000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSizes(pub Vec<u64>);

impl FromStr for PackSizes {
    type Err = DisplayError;
    fn from_str(list: &str) -> Result<PackSizes, DisplayError> {
        Ok(PackSizes(
            list.split(',')
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .map(|x| {
                    x.parse()
                        .map_err(|e| format!("Could not parse pack size {:?}: {}", x, e))
                })
                .collect::<Result<_, _>>()?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub quantity: u64,
    // overrides the product's sizes for this order only
    pub pack_sizes: Option<Vec<u64>>,
}

#[derive(Debug)]
pub struct OrdersFromFile(pub Vec<Order>);

impl FromStr for OrdersFromFile {
    type Err = DisplayError;
    fn from_str(file_name: &str) -> Result<OrdersFromFile, DisplayError> {
        Ok(OrdersFromFile(
            fs::read_to_string(file_name)
                .map_err(|e| {
                    DisplayError(format!(
                        "Could not load order file: {}, because: {}",
                        file_name, e
                    ))
                })?
                .lines()
                .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
                .map(|line| {
                    parse_order_line(line).map_err(|e| format!("{}\nOrder Line: {}", e, line))
                })
                .collect::<Result<_, _>>()
                .map_err(DisplayError)?,
        ))
    }
}

// `what` names the expected field in error messages
pub fn next_parse_with_err<'a, T, K>(iter: &mut T, what: &str) -> Result<K, String>
where
    T: Iterator<Item = &'a str>,
    K: FromStr,
    <K as std::str::FromStr>::Err: std::fmt::Display,
{
    let token = iter
        .next()
        .ok_or_else(|| format!("Line ended, expected a {}", what))?;
    token
        .parse()
        .map_err(|e| format!("Could not parse {} {:?}: {}", what, token, e))
}

pub fn parse_order_line(line: &str) -> Result<Order, String> {
    let mut iter = line.split_whitespace().peekable();
    let quantity = next_parse_with_err(&mut iter, "quantity")?;
    let mut pack_sizes = Vec::new();
    while iter.peek().is_some() {
        pack_sizes.push(next_parse_with_err(&mut iter, "pack size")?);
    }
    Ok(Order {
        quantity,
        pack_sizes: if pack_sizes.is_empty() {
            None
        } else {
            Some(pack_sizes)
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_sizes_from_list() {
        assert_eq!(
            "250, 500,1000".parse::<PackSizes>(),
            Ok(PackSizes(vec![250, 500, 1000]))
        );
        assert_eq!("".parse::<PackSizes>(), Ok(PackSizes(vec![])));
        assert!("250,big".parse::<PackSizes>().is_err());
    }

    #[test]
    fn order_lines() {
        assert_eq!(
            parse_order_line("12001"),
            Ok(Order {
                quantity: 12001,
                pack_sizes: None
            })
        );
        assert_eq!(
            parse_order_line("1251  250 600"),
            Ok(Order {
                quantity: 1251,
                pack_sizes: Some(vec![250, 600])
            })
        );
        assert_eq!(
            parse_order_line(""),
            Err("Line ended, expected a quantity".to_string())
        );
        assert!(parse_order_line("-3")
            .unwrap_err()
            .starts_with("Could not parse quantity \"-3\""));
        assert!(parse_order_line("10 250 big")
            .unwrap_err()
            .starts_with("Could not parse pack size \"big\""));
    }

    #[test]
    fn order_file() {
        let path = std::env::temp_dir().join(format!("packs-orders-{}.txt", std::process::id()));
        fs::write(&path, "# quantity [sizes]\n1\n\n1499 250 600\n").unwrap();
        let orders = path.to_str().unwrap().parse::<OrdersFromFile>().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(orders.0.len(), 2);
        assert_eq!(orders.0[1].pack_sizes, Some(vec![250, 600]));
        assert!("/nonexistent/orders.txt".parse::<OrdersFromFile>().is_err());
    }
}
