//! Fixed vocabularies for generated teams.

pub const ENTITIES: [&str; 20] = [
    "Access Bank Nigeria",
    "Access Bank Angola",
    "Access Bank Ghana",
    "Access Bank Kenya",
    "Access Bank Rwanda",
    "Access Bank Zambia",
    "Access Bank Sierra Leone",
    "Access Bank Gambia",
    "Access Bank Mozambique",
    "Access Bank Democratic Republic of Congo",
    "Access Bank Cameroon",
    "Access Bank Uganda",
    "Access Bank Tanzania",
    "Access Bank Malawi",
    "Access Bank Botswana",
    "Access Bank South Africa",
    "Access Bank Mauritius",
    "Access Bank Seychelles",
    "Access Bank United Kingdom",
    "Access Bank United Arab Emirates",
];

pub const MANAGERS: [&str; 30] = [
    "Joshua Gladness",
    "Sarah Johnson",
    "Michael Chen",
    "Emily Rodriguez",
    "David Thompson",
    "Lisa Wang",
    "James Anderson",
    "Maria Garcia",
    "Robert Brown",
    "Jennifer Davis",
    "Christopher Wilson",
    "Amanda Taylor",
    "Daniel Martinez",
    "Jessica Lee",
    "Matthew White",
    "Ashley Harris",
    "Andrew Clark",
    "Samantha Lewis",
    "Kevin Walker",
    "Nicole Hall",
    "Ryan Young",
    "Stephanie King",
    "Brandon Wright",
    "Rachel Lopez",
    "Tyler Hill",
    "Lauren Green",
    "Jordan Adams",
    "Brittany Nelson",
    "Cameron Baker",
    "Megan Carter",
];

pub const NAME_TEMPLATES: [&str; 40] = [
    "IT Support",
    "Change Management",
    "Incident Management",
    "Service Request Management",
    "Problem Management",
    "Configuration Management",
    "Release Management",
    "Service Level Management",
    "Capacity Management",
    "Availability Management",
    "IT Service Continuity",
    "Information Security",
    "Financial Management",
    "Supplier Management",
    "Knowledge Management",
    "Customer Service",
    "Technical Support",
    "Network Operations",
    "Database Administration",
    "System Administration",
    "Security Operations",
    "Compliance Team",
    "Risk Management",
    "Quality Assurance",
    "Testing Team",
    "Development Team",
    "DevOps Team",
    "Cloud Operations",
    "Infrastructure Team",
    "Application Support",
    "Business Analysis",
    "Project Management",
    "Training Team",
    "Documentation Team",
    "Monitoring Team",
    "Backup Team",
    "Disaster Recovery",
    "Vendor Management",
    "Asset Management",
    "License Management",
];

pub const CODE_PREFIXES: [&str; 40] = [
    "IT",
    "CM",
    "IM",
    "SR",
    "PM",
    "CF",
    "RM",
    "SL",
    "CP",
    "AV",
    "SC",
    "IS",
    "FM",
    "SM",
    "KM",
    "CS",
    "TS",
    "NO",
    "DA",
    "SA",
    "SO",
    "CT",
    "RM",
    "QA",
    "TT",
    "DT",
    "DO",
    "CO",
    "IF",
    "AS",
    "BA",
    "PM",
    "TR",
    "DC",
    "MT",
    "BT",
    "DR",
    "VM",
    "AM",
    "LM",
];
