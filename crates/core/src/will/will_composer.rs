//! Will-text composer.
//!
//! A pure string-template function: same input and date always yield the
//! same document. Grouping follows beneficiary declaration order.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};

use super::will_model::{EstateAsset, WillData};

/// Fixed disclaimer every draft opens with. The document is a non-binding
/// draft by design.
const DISCLAIMER: &str = "***DISCLAIMER: This document is a computer-generated draft and is not a \
legally binding will. It is intended for informational purposes only. You MUST consult a \
qualified legal professional to draft, review, and execute a formal will that complies with the \
laws of your jurisdiction. Moneta is not a law firm and does not provide legal advice.***";

/// Composes the draft stamped with today's date.
pub fn compose_will(data: &WillData) -> String {
    compose_will_dated(data, Utc::now().date_naive())
}

/// Composes the draft stamped with the given date.
///
/// Assets are grouped by their owning beneficiary in beneficiary order;
/// beneficiaries with no assigned assets are omitted from the itemized
/// section. Unassigned assets, including any whose `beneficiary_id`
/// references no existing beneficiary, pool into the residuary clause
/// attributed to the first beneficiary.
pub fn compose_will_dated(data: &WillData, date: NaiveDate) -> String {
    let today = date.format("%-d %B %Y").to_string();

    let known_ids: HashSet<&str> = data
        .beneficiaries
        .iter()
        .map(|beneficiary| beneficiary.id.as_str())
        .collect();

    let (assigned, unassigned): (Vec<&EstateAsset>, Vec<&EstateAsset>) =
        data.assets.iter().partition(|asset| {
            asset
                .beneficiary_id
                .as_deref()
                .is_some_and(|id| known_ids.contains(id))
        });

    let bequests: Vec<String> = data
        .beneficiaries
        .iter()
        .filter_map(|beneficiary| {
            let items: Vec<&EstateAsset> = assigned
                .iter()
                .copied()
                .filter(|asset| asset.beneficiary_id.as_deref() == Some(beneficiary.id.as_str()))
                .collect();
            if items.is_empty() {
                return None;
            }
            let list = items
                .iter()
                .map(|asset| format!("      - {}", asset.description))
                .collect::<Vec<_>>()
                .join("\n");
            Some(format!(
                "  TO: {} ({}), I bequeath the following assets:\n{}",
                beneficiary.name, beneficiary.relationship, list
            ))
        })
        .collect();
    let bequests = bequests.join("\n\n");

    let residuary = if unassigned.is_empty() {
        "All my remaining assets and property shall pass to my primary beneficiary.".to_string()
    } else {
        let recipient = data
            .beneficiaries
            .first()
            .map(|beneficiary| beneficiary.name.as_str())
            .unwrap_or("[Primary Beneficiary Name]");
        let list = unassigned
            .iter()
            .map(|asset| format!("      - {}", asset.description))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "The remainder of my estate, including the unassigned assets listed below, shall pass to {}.\n{}",
            recipient, list
        )
    };

    format!(
        r#"
{disclaimer}
------------------------------------------------------------------------------------------------

                          **LAST WILL AND TESTAMENT**
                                      OF
                               **{name_upper}**


I, {name}, residing at {address}, being of sound mind and memory, do hereby declare this to be my Last Will and Testament, revoking all former wills and codicils made by me.

**ARTICLE I: APPOINTMENT OF EXECUTOR**

I appoint as Executor of this Will:
  - Name: {executor_name}
  - Relationship: {executor_relationship}
  - Address: {executor_address}

My Executor shall have all the powers necessary to administer my estate.

**ARTICLE II: BEQUESTS OF PROPERTY**

I direct my Executor to distribute my property as follows:

{bequests}

**ARTICLE III: RESIDUARY ESTATE**

{residuary}

**ARTICLE IV: SIGNATURE AND WITNESSES**

IN WITNESS WHEREOF, I have subscribed my name below on this {today}.


__________________________________
(Signature of {name})


We, the undersigned, certify that the foregoing instrument was signed by {name} in our presence and in the presence of each other, and we now, at their request, in their presence, subscribe our names as witnesses on this {today}.


**WITNESS 1:**

Signature: _________________________
Name: {witness1_name}
Address: {witness1_address}


**WITNESS 2:**

Signature: _________________________
Name: {witness2_name}
Address: {witness2_address}
"#,
        disclaimer = DISCLAIMER,
        name_upper = data.full_name.to_uppercase(),
        name = data.full_name,
        address = data.address,
        executor_name = data.executor.name,
        executor_relationship = data.executor.relationship,
        executor_address = data.executor.address,
        bequests = bequests,
        residuary = residuary,
        today = today,
        witness1_name = data.witness1.name,
        witness1_address = data.witness1.address,
        witness2_name = data.witness2.name,
        witness2_address = data.witness2.address,
    )
}
