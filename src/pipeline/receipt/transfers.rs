use crate::models::{FieldMap, Transfer, TransferType};
use crate::pipeline::messages::MessageTemplates;
use crate::pipeline::structuring::field_names;

/// Data items carried by every transfer record: required items, then
/// collected items not already listed, then optional items tagged "(선택)".
pub fn assemble_data_items(fields: &FieldMap) -> Vec<String> {
    let mut items = fields.items_of(field_names::REQUIRED_ITEMS);
    for item in fields.items_of(field_names::DATA_COLLECTED) {
        if !items.contains(&item) {
            items.push(item);
        }
    }
    for item in fields.items_of(field_names::OPTIONAL_ITEMS) {
        let tagged = format!("{} {item}", MessageTemplates::OPTIONAL_PREFIX);
        if !items.contains(&tagged) {
            items.push(tagged);
        }
    }
    items
}

/// Source fields for transfer records, in output order.
const TRANSFER_SOURCES: &[(&str, TransferType, bool)] = &[
    (field_names::THIRD_PARTY, TransferType::ThirdParty, false),
    (field_names::OUTSOURCING, TransferType::Outsourcing, false),
    (field_names::OVERSEAS_TRANSFER, TransferType::Overseas, true),
    (field_names::DATA_TRANSFERS, TransferType::Transfer, false),
];

/// One record per destination named in any transfer-bearing field.
pub fn build_transfers(fields: &FieldMap, data_items: &[String]) -> Vec<Transfer> {
    TRANSFER_SOURCES
        .iter()
        .flat_map(|(name, transfer_type, is_overseas)| {
            fields
                .items_of(name)
                .into_iter()
                .map(move |destination| Transfer {
                    transfer_type: *transfer_type,
                    destination,
                    is_overseas: *is_overseas,
                    data_items: data_items.to_vec(),
                })
        })
        .collect()
}
