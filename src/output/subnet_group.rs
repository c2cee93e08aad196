use aws_sdk_rds::types;
use serde_json::{Value, json};

fn subnet(subnet: &types::Subnet) -> Value {
    json!({
        "SubnetIdentifier": subnet.subnet_identifier,
        "SubnetAvailabilityZone": subnet
            .subnet_availability_zone
            .as_ref()
            .and_then(|zone| zone.name.as_deref()),
        "SubnetStatus": subnet.subnet_status,
    })
}

/// A DB subnet group.
pub fn db_subnet_group(group: &types::DbSubnetGroup) -> Value {
    json!({
        "DBSubnetGroupName": group.db_subnet_group_name,
        "DBSubnetGroupDescription": group.db_subnet_group_description,
        "DBSubnetGroupArn": group.db_subnet_group_arn,
        "VpcId": group.vpc_id,
        "SubnetGroupStatus": group.subnet_group_status,
        "Subnets": group.subnets().iter().map(subnet).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_subnet_group() {
        let group = types::DbSubnetGroup::builder()
            .db_subnet_group_name("private")
            .vpc_id("vpc-1")
            .subnets(
                types::Subnet::builder()
                    .subnet_identifier("subnet-1")
                    .subnet_availability_zone(
                        types::AvailabilityZone::builder().name("us-east-1a").build(),
                    )
                    .subnet_status("Active")
                    .build(),
            )
            .build();
        let actual = db_subnet_group(&group);
        assert_eq!(actual["DBSubnetGroupName"], "private");
        assert_eq!(actual["VpcId"], "vpc-1");
        assert_eq!(
            actual["Subnets"],
            json!([{
                "SubnetIdentifier": "subnet-1",
                "SubnetAvailabilityZone": "us-east-1a",
                "SubnetStatus": "Active",
            }])
        );
    }
}
