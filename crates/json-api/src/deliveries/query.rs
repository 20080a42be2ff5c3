//! Board Query
//!
//! Sorting, grouping and column filters shared by the listing and the report. Any query
//! parameter named after a field filters on that field.

use salvo::{Request, prelude::StatusError};

use dockside::{
    board::DeliveryBoard,
    fields::DeliveryField,
    sort::{SortDirection, SortOrder},
};

use crate::extensions::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BoardQuery {
    sort: Option<SortOrder>,
    group_by_status: bool,
    filters: Vec<(DeliveryField, String)>,
}

impl BoardQuery {
    pub(crate) fn from_request(req: &Request) -> Result<Self, StatusError> {
        let field = req
            .query::<String>("sort")
            .map(|value| value.parse::<DeliveryField>())
            .transpose()
            .or_400("invalid \"sort\" query parameter")?;

        let direction = req
            .query::<String>("direction")
            .map(|value| value.parse::<SortDirection>())
            .transpose()
            .or_400("invalid \"direction\" query parameter")?;

        let sort = match (field, direction) {
            (None, None) => None,
            (field, direction) => Some(SortOrder::new(
                field.unwrap_or_else(|| SortOrder::default().field),
                direction.unwrap_or_default(),
            )),
        };

        let group_by_status = match req.query::<String>("group").as_deref() {
            None | Some("") => false,
            Some(group) if group.eq_ignore_ascii_case("status") => true,
            Some(group) => {
                return Err(StatusError::bad_request()
                    .brief(format!("cannot group deliveries by \"{group}\"")));
            }
        };

        let filters = DeliveryField::ALL
            .into_iter()
            .filter_map(|field| {
                req.query::<String>(field.as_str())
                    .map(|value| (field, value))
            })
            .collect();

        Ok(Self {
            sort,
            group_by_status,
            filters,
        })
    }

    /// Sort first, then group, then filter.
    pub(crate) fn apply(self, board: &mut DeliveryBoard) {
        if let Some(order) = self.sort {
            board.sort(order);
        }

        if self.group_by_status {
            board.group_by_status();
        }

        for (field, value) in self.filters {
            board.set_filter(field, value);
        }
    }
}
